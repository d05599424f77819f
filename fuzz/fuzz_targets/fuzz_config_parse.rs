#![no_main]

use libfuzzer_sys::fuzz_target;
use vouch_identify::IdentifyConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Anything that parses must survive a serialize/parse round trip.
    if let Ok(config) = IdentifyConfig::from_toml_str(s) {
        let reparsed = IdentifyConfig::from_toml_str(&config.to_toml_string())
            .expect("serialized config must parse");
        assert_eq!(reparsed, config);
    }
});
