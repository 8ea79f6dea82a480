#![no_main]

use airgate::config::loader::ConfigLoader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        let loader = ConfigLoader::with_defaults();

        // Any outcome is fine as long as nothing panics
        if let Ok(result) = loader.load_from_str(yaml_str) {
            assert!(!result.config.gates.is_empty());
            assert!(result.config.resolution_minutes > 0);
        }
    }
});
