//! Board lookup
//!
//! Every search only looks at installed platform releases. Board ids are not
//! globally unique, so searches by USB id or bare id can return boards from
//! several packages; results are sorted by FQBN so callers see a stable
//! order.

use super::Registry;
use crate::core::board::Board;
use crate::core::fqbn::Fqbn;
use crate::error::BoardError;

impl Registry {
    /// Every installed board, unordered
    fn installed_boards(&self) -> impl Iterator<Item = &Board> {
        self.packages()
            .iter()
            .flat_map(|package| package.platforms())
            .filter_map(|platform| platform.installed())
            .flat_map(|release| release.boards().iter())
    }

    /// Find every installed board declaring the given USB id
    ///
    /// Hex values compare case-insensitively. No match is an empty result,
    /// not an error.
    pub fn find_boards_by_usb_id(&self, vid: &str, pid: &str) -> Vec<&Board> {
        let boards = self
            .installed_boards()
            .filter(|board| board.has_usb_id(vid, pid))
            .collect();
        sorted_by_fqbn(boards)
    }

    /// Find every installed board with the given id, across all packages
    pub fn find_boards_by_id(&self, id: &str) -> Vec<&Board> {
        let boards = self.installed_boards().filter(|board| board.id == id).collect();
        sorted_by_fqbn(boards)
    }

    /// Find the board identified by an FQBN
    ///
    /// Fails with a distinct error for a malformed FQBN, an unknown package,
    /// a platform with no installed release, and a missing board. An
    /// architecture the package doesn't have is reported as a missing board.
    pub fn find_board_by_fqbn(&self, fqbn: &str) -> Result<&Board, BoardError> {
        let parsed = Fqbn::parse(fqbn)?;
        tracing::debug!("Looking up board {parsed}");

        let package = self
            .packages()
            .get(&parsed.packager)
            .ok_or_else(|| BoardError::PackageNotFound {
                packager: parsed.packager.clone(),
            })?;

        let not_found = || BoardError::BoardNotFound {
            fqbn: fqbn.to_string(),
        };

        let platform = package
            .platform(&parsed.architecture)
            .ok_or_else(not_found)?;

        let release = platform
            .installed()
            .ok_or_else(|| BoardError::PlatformNotInstalled {
                packager: parsed.packager.clone(),
                architecture: parsed.architecture.clone(),
            })?;

        release
            .boards()
            .iter()
            .find(|board| board.id == parsed.board_id)
            .ok_or_else(not_found)
    }
}

fn sorted_by_fqbn(mut boards: Vec<&Board>) -> Vec<&Board> {
    boards.sort_by_cached_key(|board| board.fqbn());
    boards
}
