use crate::store::PresetStore;
use crate::tree::JsonTree;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A store in a fresh temporary directory with default configuration.
pub(crate) fn create_test_store() -> (TempDir, PresetStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = PresetStore::at(temp_dir.path()).unwrap();
    (temp_dir, store)
}

/// Scene settings shaped like the paths in every field group.
pub(crate) fn sample_scene_value() -> Value {
    json!({
        "render": {
            "engine": "CYCLES",
            "use_simplify": false,
            "simplify_subdivision": 6,
            "simplify_subdivision_render": 6,
            "use_motion_blur": false,
            "motion_blur_shutter": 0.5,
            "film_transparent": false,
            "threads_mode": "AUTO",
            "threads": 8,
            "tile_x": 64,
            "tile_y": 64,
            "use_high_quality_normals": false,
            "resolution_x": 1920,
            "resolution_y": 1080,
            "resolution_percentage": 100,
            "fps": 24,
            "filepath": "/tmp/render/",
            "image_settings": { "file_format": "PNG" },
            "ffmpeg": {
                "format": "MPEG4",
                "codec": "H264",
                "constant_rate_factor": "MEDIUM",
                "audio_codec": "NONE"
            }
        },
        "view_settings": { "exposure": 0.0 },
        "cycles": {
            "device": "GPU",
            "samples": 128,
            "preview_samples": 32,
            "use_adaptive_sampling": true,
            "adaptive_threshold": 0.01,
            "adaptive_min_samples": 0,
            "use_denoising": true,
            "denoiser": "OPENIMAGEDENOISE",
            "use_preview_denoising": false,
            "preview_denoiser": "AUTO",
            "max_bounces": 12,
            "diffuse_bounces": 4,
            "glossy_bounces": 4,
            "transparent_max_bounces": 8,
            "transmission_bounces": 12,
            "volume_bounces": 0,
            "motion_blur_position": "CENTER",
            "tile_order": "HILBERT_SPIRAL"
        },
        "eevee": {
            "taa_render_samples": 64,
            "taa_samples": 16,
            "use_taa_reprojection": true,
            "use_gtao": false,
            "gtao_distance": 0.2,
            "use_bloom": false,
            "bloom_threshold": 0.8,
            "use_ssr": false,
            "use_ssr_refraction": false,
            "use_motion_blur": false,
            "motion_blur_position": "CENTER",
            "motion_blur_shutter": 0.5,
            "shadow_cube_size": "512",
            "shadow_cascade_size": "1024",
            "use_shadow_high_bitdepth": false,
            "use_soft_shadows": true
        }
    })
}

pub(crate) fn sample_scene() -> JsonTree {
    JsonTree::new("Scene", sample_scene_value()).unwrap()
}
