//! Field groups: the static attribute paths a new preset can capture.

use crate::error::{Result, RsetupError};
use std::fmt;
use std::str::FromStr;

const RENDER_PATHS: &[&str] = &[
    "render.engine",
    "render.use_simplify",
    "render.simplify_subdivision",
    "render.simplify_subdivision_render",
    "render.use_motion_blur",
    "render.motion_blur_shutter",
    "render.film_transparent",
    "render.threads_mode",
    "render.threads",
    "render.tile_x",
    "render.tile_y",
    "render.use_high_quality_normals",
    "view_settings.exposure",
];

const CYCLES_PATHS: &[&str] = &[
    "cycles.device",
    "cycles.samples",
    "cycles.preview_samples",
    "cycles.use_adaptive_sampling",
    "cycles.adaptive_threshold",
    "cycles.adaptive_min_samples",
    "cycles.use_denoising",
    "cycles.denoiser",
    "cycles.use_preview_denoising",
    "cycles.preview_denoiser",
    "cycles.max_bounces",
    "cycles.diffuse_bounces",
    "cycles.glossy_bounces",
    "cycles.transparent_max_bounces",
    "cycles.transmission_bounces",
    "cycles.volume_bounces",
    "cycles.motion_blur_position",
    "cycles.tile_order",
];

const EEVEE_PATHS: &[&str] = &[
    "eevee.taa_render_samples",
    "eevee.taa_samples",
    "eevee.use_taa_reprojection",
    "eevee.use_gtao",
    "eevee.gtao_distance",
    "eevee.use_bloom",
    "eevee.bloom_threshold",
    "eevee.use_ssr",
    "eevee.use_ssr_refraction",
    "eevee.use_motion_blur",
    "eevee.motion_blur_position",
    "eevee.motion_blur_shutter",
    "eevee.shadow_cube_size",
    "eevee.shadow_cascade_size",
    "eevee.use_shadow_high_bitdepth",
    "eevee.use_soft_shadows",
];

const OUTPUT_PATHS: &[&str] = &[
    "render.resolution_x",
    "render.resolution_y",
    "render.resolution_percentage",
    "render.fps",
    "render.filepath",
    "render.image_settings.file_format",
    "render.ffmpeg.format",
    "render.ffmpeg.codec",
    "render.ffmpeg.constant_rate_factor",
    "render.ffmpeg.audio_codec",
];

/// A named, fixed list of attribute paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldGroup {
    Render,
    Cycles,
    Eevee,
    Output,
}

impl FieldGroup {
    /// Every group, in capture order.
    pub const ALL: [FieldGroup; 4] = [
        FieldGroup::Render,
        FieldGroup::Cycles,
        FieldGroup::Eevee,
        FieldGroup::Output,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldGroup::Render => "render",
            FieldGroup::Cycles => "cycles",
            FieldGroup::Eevee => "eevee",
            FieldGroup::Output => "output",
        }
    }

    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            FieldGroup::Render => RENDER_PATHS,
            FieldGroup::Cycles => CYCLES_PATHS,
            FieldGroup::Eevee => EEVEE_PATHS,
            FieldGroup::Output => OUTPUT_PATHS,
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldGroup {
    type Err = RsetupError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        FieldGroup::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                RsetupError::InvalidArgument(format!(
                    "unknown field group '{}' (expected one of: render, cycles, eevee, output)",
                    wanted
                ))
            })
    }
}

/// Concatenate the paths of the selected groups.
///
/// Groups are taken in [`FieldGroup::ALL`] order regardless of the order
/// given, and a group listed twice contributes once.
pub fn collect_paths(groups: &[FieldGroup]) -> Vec<String> {
    FieldGroup::ALL
        .into_iter()
        .filter(|group| groups.contains(group))
        .flat_map(|group| group.paths().iter().map(|path| path.to_string()))
        .collect()
}
