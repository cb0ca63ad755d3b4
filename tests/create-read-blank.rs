use std::fs;

use lnk::{HotkeyFlags, HotkeyKey, HotkeyModifiers, LinkFlags};

const TEST_FILE_NAME_ANSI: &str = "temp-ansi.lnk";
const TEST_FILE_NAME_UNICODE: &str = "temp-unicode.lnk";

#[test]
fn create_read_blank() {
    for (is_unicode, path) in [(false, TEST_FILE_NAME_ANSI), (true, TEST_FILE_NAME_UNICODE)] {
        let mut shortcut = lnk::ShellLink::new();
        shortcut
            .header_mut()
            .update_link_flags(LinkFlags::IS_UNICODE, is_unicode);
        shortcut.set_name(Some("Blank name".to_string()));
        shortcut.save(path).expect("Failed to save shortcut!");

        let shortcut = lnk::ShellLink::open(path).unwrap();
        assert_eq!(shortcut.name().as_deref(), Some("Blank name"));
        assert_eq!(
            shortcut.header().link_flags().contains(LinkFlags::IS_UNICODE),
            is_unicode
        );

        fs::remove_file(path).expect("delete shortcut");
    }
}

#[test]
fn create_read_with_hotkey_and_show_command() {
    let mut shortcut = lnk::ShellLink::new();
    shortcut.header_mut().set_hotkey(HotkeyFlags::new(
        HotkeyKey::KeyQ,
        HotkeyModifiers::HOTKEYF_ALT,
    ));
    shortcut.set_arguments(Some("--verbose".to_string()));

    let path = "temp-hotkey.lnk";
    shortcut.save(path).expect("Failed to save shortcut!");

    let read_back = lnk::ShellLink::open(path).unwrap();
    assert_eq!(*read_back.header().hotkey().key(), HotkeyKey::KeyQ);
    assert_eq!(*read_back.header().hotkey().modifiers(), HotkeyModifiers::HOTKEYF_ALT);
    assert_eq!(read_back.arguments().as_deref(), Some("--verbose"));

    fs::remove_file(path).expect("delete shortcut");
}
