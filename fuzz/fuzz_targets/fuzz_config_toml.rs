#![no_main]

use accessorgen::{Config, Target};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<Config>(content) {
            let _ = config.resolve(None);
            let _ = config.resolve(Some(Target::Php));
        }
    }
});
