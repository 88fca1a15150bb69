//! Integration tests for board lookup
//!
//! Covers lookup by USB id, by bare id and by FQBN, including the four
//! distinct FQBN failure reasons.

mod common;

use std::collections::HashSet;

use common::two_tool_registry;
use corepm::core::board::Board;
use corepm::error::BoardError;
use corepm::Registry;

/// Registry where `pkg` and `other` both define a board called `boardX`,
/// plus `pkg:uninstalled` which is indexed but not installed
fn ambiguous_registry() -> Registry {
    let mut registry = two_tool_registry(vec![]);
    let packages = registry.packages_mut();

    packages
        .get_or_create("other")
        .get_or_create_platform("arch")
        .install_release(
            "2.1.0",
            "/hardware/other/arch",
            vec![
                Board::new("boardX", "Other Board X").with_usb_id("0x1234", "0xabcd"),
                Board::new("boardY", "Other Board Y"),
            ],
        );

    packages
        .get_or_create("pkg")
        .get_or_create_platform("uninstalled")
        .get_or_create_release("0.1.0");

    registry
}

fn fqbn_set(boards: &[&Board]) -> HashSet<String> {
    boards.iter().map(|b| b.fqbn()).collect()
}

// ============================================
// USB id lookup
// ============================================

/// Test: every board with the USB id is returned, across packages
#[test]
fn test_usb_lookup_spans_packages() {
    let registry = ambiguous_registry();
    let boards = registry.find_boards_by_usb_id("0x1234", "0xABCD");

    let expected: HashSet<String> = ["pkg:arch:boardX", "other:arch:boardX"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(fqbn_set(&boards), expected);
}

/// Test: no match yields an empty result, not an error
#[test]
fn test_usb_lookup_no_match_is_empty() {
    let registry = ambiguous_registry();
    assert!(registry.find_boards_by_usb_id("0x0000", "0x0000").is_empty());
    assert!(Registry::new().find_boards_by_usb_id("0x1234", "0xabcd").is_empty());
}

// ============================================
// Bare id lookup
// ============================================

/// Test: ambiguous ids return every match
#[test]
fn test_id_lookup_returns_every_match() {
    let registry = ambiguous_registry();
    let boards = registry.find_boards_by_id("boardX");
    assert_eq!(boards.len(), 2);

    let boards = registry.find_boards_by_id("boardY");
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].name, "Other Board Y");
}

/// Test: repeated lookups return the same order
#[test]
fn test_id_lookup_order_is_stable() {
    let registry = ambiguous_registry();
    let first: Vec<String> = registry.find_boards_by_id("boardX").iter().map(|b| b.fqbn()).collect();
    let second: Vec<String> = registry.find_boards_by_id("boardX").iter().map(|b| b.fqbn()).collect();
    assert_eq!(first, second);
}

// ============================================
// FQBN lookup
// ============================================

/// Test: 3- and 4-segment FQBNs resolve
#[test]
fn test_fqbn_lookup_succeeds() {
    let registry = ambiguous_registry();

    let board = registry.find_board_by_fqbn("pkg:arch:boardX").unwrap();
    assert_eq!(board.name, "Board X");

    let board = registry.find_board_by_fqbn("other:arch:boardX:speed=fast").unwrap();
    assert_eq!(board.name, "Other Board X");
    assert_eq!(board.platform().version, "2.1.0");
}

/// Test: 1, 2 and 5 segments are malformed
#[test]
fn test_fqbn_wrong_segment_count() {
    let registry = ambiguous_registry();
    for fqbn in ["pkg", "pkg:arch", "pkg:arch:boardX:a=b:extra"] {
        let err = registry.find_board_by_fqbn(fqbn).unwrap_err();
        assert!(
            matches!(err, BoardError::MalformedFqbn { .. }),
            "{fqbn} should be malformed, got {err}"
        );
        assert!(err.to_string().contains("incorrect format for fqbn"));
    }
}

/// Test: unknown package
#[test]
fn test_fqbn_package_not_found() {
    let registry = ambiguous_registry();
    let err = registry.find_board_by_fqbn("nobody:arch:boardX").unwrap_err();
    assert_eq!(
        err,
        BoardError::PackageNotFound {
            packager: "nobody".to_string()
        }
    );
    assert!(err.to_string().contains("nobody"));
}

/// Test: platform not installed is distinct from board not found
#[test]
fn test_fqbn_platform_not_installed_vs_board_not_found() {
    let registry = ambiguous_registry();

    let not_installed = registry
        .find_board_by_fqbn("pkg:uninstalled:boardX")
        .unwrap_err();
    assert!(matches!(not_installed, BoardError::PlatformNotInstalled { .. }));

    let missing_board = registry.find_board_by_fqbn("pkg:arch:boardZ").unwrap_err();
    assert!(matches!(missing_board, BoardError::BoardNotFound { .. }));

    assert_ne!(not_installed, missing_board);
}

/// Test: an architecture the package doesn't have is a missing board
#[test]
fn test_fqbn_unknown_architecture() {
    let registry = ambiguous_registry();
    assert!(matches!(
        registry.find_board_by_fqbn("pkg:riscv:boardX"),
        Err(BoardError::BoardNotFound { .. })
    ));
}

/// Test: reinstalling a different platform release replaces its boards
#[test]
fn test_reinstall_replaces_boards() {
    let mut registry = ambiguous_registry();
    registry
        .packages_mut()
        .get_mut("other")
        .and_then(|p| p.platform_mut("arch"))
        .expect("platform exists")
        .install_release("2.2.0", "/hardware/other/arch-2.2.0", vec![Board::new("boardZ", "Board Z")]);

    assert!(registry.find_board_by_fqbn("other:arch:boardY").is_err());
    let board = registry.find_board_by_fqbn("other:arch:boardZ").unwrap();
    assert_eq!(board.platform().version, "2.2.0");
}
