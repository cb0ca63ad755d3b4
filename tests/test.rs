//! Integration test built from an in-memory byte buffer rather than a
//! checked-in `.lnk` fixture (none exist in this repository's test corpus).

use std::io::Cursor;

use lnk::*;

#[test]
fn test_lnk_header() {
    let mut link = ShellLink::new();
    link.set_relative_path(Some(".\\target.exe".to_string()));
    link.set_working_dir(Some("C:\\Windows".to_string()));
    link.header_mut().set_file_attributes(FileAttributeFlags::FILE_ATTRIBUTE_ARCHIVE);
    link.header_mut()
        .update_link_flags(LinkFlags::ENABLE_TARGET_METADATA, true);

    let mut list = LinkTargetIdList::new();
    list.push(ItemID::new(vec![0x14, 0x00, 0x1f, 0x50]));
    link.set_link_target_id_list(Some(list));
    link.set_link_info(Some(LinkInfo::new("target.exe".to_string())));

    let mut buf = Vec::new();
    link.write_to(&mut buf).unwrap();

    let shortcut = ShellLink::load(&mut Cursor::new(buf)).unwrap();

    assert_eq!(
        *shortcut.header().link_flags(),
        LinkFlags::HAS_LINK_TARGET_ID_LIST
            | LinkFlags::HAS_LINK_INFO
            | LinkFlags::HAS_RELATIVE_PATH
            | LinkFlags::HAS_WORKING_DIR
            | LinkFlags::IS_UNICODE
            | LinkFlags::ENABLE_TARGET_METADATA,
        "Link flags should be parsed correctly"
    );

    assert_eq!(
        *shortcut.header().file_attributes(),
        FileAttributeFlags::FILE_ATTRIBUTE_ARCHIVE,
        "File attributes should be parsed correctly"
    );

    assert_eq!(shortcut.header().file_size(), 0x00, "File size should be parsed correctly");
    assert_eq!(shortcut.header().icon_index(), 0x00, "Icon index should be parsed correctly");
    assert_eq!(*shortcut.header().show_command(), ShowCommand::ShowNormal, "Show command should be parsed correctly");
    assert_eq!(*shortcut.header().hotkey().key(), HotkeyKey::NoKeyAssigned);
    assert_eq!(*shortcut.header().hotkey().modifiers(), HotkeyModifiers::NO_MODIFIER);

    assert_eq!(shortcut.relative_path().as_deref(), Some(".\\target.exe"));
    assert_eq!(shortcut.working_dir().as_deref(), Some("C:\\Windows"));
    assert_eq!(
        shortcut.link_info().as_ref().unwrap().common_path_suffix(),
        "target.exe"
    );
    assert_eq!(shortcut.link_target_id_list().as_ref().unwrap().id_list().len(), 1);
}

/// Spec §8 scenario S1: an all-zero-flags minimal shell link round-trips
/// byte-for-byte as exactly 80 bytes (76-byte header + 4-byte ExtraData
/// terminator).
#[test]
fn s1_minimum_shell_link_is_80_bytes() {
    let mut link = ShellLink::new();
    link.header_mut().set_link_flags(LinkFlags::empty());
    link.header_mut().set_creation_time(FileTime::UNSET);
    link.header_mut().set_access_time(FileTime::UNSET);
    link.header_mut().set_write_time(FileTime::UNSET);
    link.header_mut().set_file_attributes(FileAttributeFlags::empty());

    let mut buf = Vec::new();
    link.write_to(&mut buf).unwrap();
    assert_eq!(buf.len(), 80);

    let read_back = ShellLink::load(&mut Cursor::new(&buf)).unwrap();
    assert!(read_back.link_target_id_list().is_none());
    assert!(read_back.link_info().is_none());

    let mut rewritten = Vec::new();
    read_back.write_to(&mut rewritten).unwrap();
    assert_eq!(buf, rewritten);
}

/// Spec §8 scenario S2: hotkey round-trips through the key/modifier split.
#[test]
fn s2_hotkey_round_trips() {
    let mut link = ShellLink::new();
    link.header_mut().set_hotkey(HotkeyFlags::new(
        HotkeyKey::KeyC,
        HotkeyModifiers::HOTKEYF_CONTROL | HotkeyModifiers::HOTKEYF_SHIFT,
    ));

    let mut buf = Vec::new();
    link.write_to(&mut buf).unwrap();
    let read_back = ShellLink::load(&mut Cursor::new(&buf)).unwrap();
    assert_eq!(*read_back.header().hotkey().key(), HotkeyKey::KeyC);
    assert_eq!(
        *read_back.header().hotkey().modifiers(),
        HotkeyModifiers::HOTKEYF_CONTROL | HotkeyModifiers::HOTKEYF_SHIFT
    );
}

/// Spec §8 scenario S3: IdList item add/remove keeps the size accounting
/// exact (`total_size == 2 + sum(item.size) + 2`).
#[test]
fn s3_idlist_add_remove_keeps_size_accounting() {
    let mut list = LinkTargetIdList::new();
    assert_eq!(list.id_list_size(), 4);

    list.push(ItemID::new(vec![0x01, 0x02, 0x03]));
    assert_eq!(list.id_list_size(), 9);

    list.push(ItemID::new(vec![0xAA, 0xBB]));
    assert_eq!(list.id_list_size(), 13);

    let removed = list.remove(0).unwrap();
    assert_eq!(removed.data(), &vec![0x01u8, 0x02, 0x03]);
    assert_eq!(list.id_list_size(), 8);
    assert_eq!(list.id_list()[0].data(), &vec![0xAAu8, 0xBB]);
}

/// Spec §8 scenario S6: a StringData NAME_STRING field with wide encoding
/// serializes to exactly the documented bytes.
#[test]
fn s6_string_data_wide_encoding_matches_spec_bytes() {
    let mut link = ShellLink::new();
    link.set_name(Some("Hello".to_string()));

    let mut buf = Vec::new();
    link.write_to(&mut buf).unwrap();

    // StringData begins right after the 76-byte header (no IdList/LinkInfo
    // are present on this shortcut).
    let string_data = &buf[76..76 + 12];
    assert_eq!(
        string_data,
        &[0x05, 0x00, 0x48, 0x00, 0x65, 0x00, 0x6C, 0x00, 0x6C, 0x00, 0x6F, 0x00]
    );

    let read_back = ShellLink::load(&mut Cursor::new(&buf)).unwrap();
    assert_eq!(read_back.name().as_deref(), Some("Hello"));
}
