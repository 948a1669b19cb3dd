use data_runtime::configs::input_camera::{InputCameraCfg, load_default, load_from};
use std::io::Write;

#[test]
fn env_overrides_parse_and_bad_values_keep_file() {
    unsafe {
        std::env::set_var("CAM_SENSITIVITY", "2.5");
        std::env::set_var("CAM_DISTANCE", "far");
    }
    let cfg = load_default().expect("load");
    assert_eq!(cfg.sensitivity, Some(2.5));
    // data/config/input_camera.toml value survives the unparseable override
    assert_eq!(cfg.distance, Some(15.0));
}

#[test]
fn file_overrides_only_named_fields() {
    let mut f = tempfile::NamedTempFile::new().expect("tmp");
    writeln!(f, "above_offset = 3.0\nphi_min = 0.2").expect("write");
    let cfg = load_from(f.path()).expect("load");
    assert_eq!(cfg.above_offset, Some(3.0));
    assert_eq!(cfg.phi_min, Some(0.2));
    assert_eq!(cfg.phi_max, InputCameraCfg::default().phi_max);
}
