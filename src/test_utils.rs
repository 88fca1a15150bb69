//! Test utilities
//!
//! Proptest generators and a sample registry shared by unit tests.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid package name (lowercase alphanumeric with hyphens)
    pub fn package_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,30}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate a valid semver version string
    pub fn semver_version() -> impl Strategy<Value = String> {
        (1u32..100, 0u32..100, 0u32..100)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a non-empty FQBN segment (no colons)
    pub fn fqbn_segment() -> impl Strategy<Value = String> {
        "[a-z0-9_.-]{1,16}"
    }

    /// Generate a 16-bit USB id in `0x` hex form, mixed case
    pub fn usb_hex_id() -> impl Strategy<Value = String> {
        (any::<u16>(), any::<bool>()).prop_map(|(id, upper)| {
            if upper {
                format!("0x{id:04X}")
            } else {
                format!("0x{id:04x}")
            }
        })
    }
}

#[cfg(test)]
pub mod fixtures {
    use std::sync::{Arc, Mutex};

    use crate::core::board::Board;
    use crate::core::package::ToolDependency;
    use crate::registry::{DownloadProgress, EventSink, Registry};

    /// A registry with two packages sharing a board id
    ///
    /// - `arduino:avr@1.6.20` installed (uno, mega, yun), pins avr-gcc
    ///   4.8.1-arduino5 and avrdude 6.3.0-arduino9
    /// - `arduino:sam@1.6.11` indexed, not installed
    /// - `adafruit:avr@1.4.9` installed (uno, flora8), no pins
    /// - installed tools: avr-gcc 4.8.1-arduino5 and
    ///   4.9.2-atmel3.5.4-arduino2, avrdude 6.3.0-arduino9, bossac 1.7.0
    pub fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        let packages = registry.packages_mut();

        let arduino = packages.get_or_create("arduino");
        let avr_gcc = arduino.get_or_create_tool("avr-gcc");
        avr_gcc
            .get_or_create_release("4.8.1-arduino5")
            .mark_installed("/tools/avr-gcc/4.8.1-arduino5");
        avr_gcc
            .get_or_create_release("4.9.2-atmel3.5.4-arduino2")
            .mark_installed("/tools/avr-gcc/4.9.2-atmel3.5.4-arduino2");
        avr_gcc.get_or_create_release("5.4.0-atmel3.6.1-arduino2");

        let avrdude = arduino.get_or_create_tool("avrdude");
        avrdude
            .get_or_create_release("6.3.0-arduino9")
            .mark_installed("/tools/avrdude/6.3.0-arduino9");
        avrdude.get_or_create_release("6.0.1-arduino5");

        arduino
            .get_or_create_tool("bossac")
            .get_or_create_release("1.7.0")
            .mark_installed("/tools/bossac/1.7.0");

        let avr = arduino.get_or_create_platform("avr");
        avr.get_or_create_release("1.6.21");
        let release = avr.install_release(
            "1.6.20",
            "/hardware/arduino/avr/1.6.20",
            vec![
                Board::new("uno", "Arduino Uno")
                    .with_usb_id("0x2341", "0x0043")
                    .with_usb_id("0x2A03", "0x0043"),
                Board::new("mega", "Arduino Mega or Mega 2560")
                    .with_usb_id("0x2341", "0x0010")
                    .with_usb_id("0x2341", "0x0042"),
                Board::new("yun", "Arduino Yún").with_usb_id("0x2341", "0x0041"),
            ],
        );
        release.dependencies = vec![
            ToolDependency::new("arduino", "avr-gcc", "4.8.1-arduino5"),
            ToolDependency::new("arduino", "avrdude", "6.3.0-arduino9"),
        ];

        let sam = arduino.get_or_create_platform("sam");
        sam.get_or_create_release("1.6.11")
            .advertised_boards
            .push("Arduino Due".to_string());

        packages
            .get_or_create("adafruit")
            .get_or_create_platform("avr")
            .install_release(
                "1.4.9",
                "/hardware/adafruit/avr/1.4.9",
                vec![
                    Board::new("uno", "Adafruit Metro").with_usb_id("0x239A", "0x800C"),
                    Board::new("flora8", "Adafruit Flora").with_usb_id("0x239A", "0x8004"),
                ],
            );

        registry
    }

    /// Event sink that records progress calls as strings
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSink {
        pub fn new(events: Arc<Mutex<Vec<String>>>) -> Self {
            Self { events }
        }
    }

    impl EventSink for RecordingSink {
        fn on_downloading_something(&self) -> Box<dyn DownloadProgress> {
            Box::new(RecordingProgress {
                events: Arc::clone(&self.events),
            })
        }
    }

    struct RecordingProgress {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingProgress {
        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl DownloadProgress for RecordingProgress {
        fn on_download_started(&self, file: &str, total_bytes: u64) {
            self.push(format!("start {file} {total_bytes}"));
        }

        fn on_progress(&self, file: &str, downloaded: u64) {
            self.push(format!("progress {file} {downloaded}"));
        }

        fn on_download_finished(&self, file: &str) {
            self.push(format!("finish {file}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_registry;
    use super::generators::*;
    use crate::core::board::UsbId;
    use proptest::prelude::*;

    #[test]
    fn test_sample_registry_shape() {
        let registry = sample_registry();
        assert_eq!(registry.packages().len(), 2);
        assert_eq!(registry.installed_tool_releases().len(), 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_usb_ids_match_across_case(vid in usb_hex_id(), pid in usb_hex_id()) {
            let usb = UsbId::new(&vid.to_uppercase(), &pid.to_lowercase());
            prop_assert!(usb.matches(&vid, &pid));
        }
    }
}
