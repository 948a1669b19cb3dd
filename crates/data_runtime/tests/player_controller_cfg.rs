use data_runtime::configs::player_controller::{load_default, load_from};
use std::io::Write;

#[test]
fn env_overrides_parse() {
    unsafe {
        std::env::set_var("PC_SPEED", "12");
        std::env::set_var("PC_BOOST_SPEED", "not-a-number");
        std::env::set_var("PC_JUMP_POWER", "18.5");
    }
    let cfg = load_default().expect("load");
    assert_eq!(cfg.input_speed, Some(12.0));
    // Unparseable overrides are ignored.
    assert_eq!(cfg.input_boost_speed, Some(30.0));
    assert_eq!(cfg.jump_power, Some(18.5));
}

#[test]
fn bad_toml_is_an_error_with_context() {
    let mut f = tempfile::NamedTempFile::new().expect("tmp");
    writeln!(f, "input_speed = \"fast\"").expect("write");
    let err = load_from(f.path()).expect_err("type mismatch");
    assert!(format!("{err:#}").contains("player_controller"));
}
