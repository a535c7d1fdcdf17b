//! Keyboard mapping.
//!
//! Maps key names to semantic `CanvasAction`s. Letter keys ignore case.
//!
//! | Key | Action |
//! |-----|--------|
//! | `b` `c` `d` `k` `f` `g` `p` | place bed, chair, dresser, desk, sofa, rug, plant |
//! | `r` | rotate item under pointer |
//! | `Backspace` | delete item under pointer |
//! | `s` | save snapshot |

use dd_core::Sprite;

/// Actions a key press can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasAction {
    Add(Sprite),
    Rotate,
    Delete,
    Save,
}

pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key to an action, or `None` if the key is unbound.
    pub fn resolve(key: &str) -> Option<CanvasAction> {
        if key == "Backspace" {
            return Some(CanvasAction::Delete);
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        match c.to_ascii_lowercase() {
            'r' => Some(CanvasAction::Rotate),
            's' => Some(CanvasAction::Save),
            other => Sprite::from_key(other).map(CanvasAction::Add),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_sprite_letters() {
        let cases = [
            ("b", Sprite::Bed),
            ("c", Sprite::Chair),
            ("d", Sprite::Dresser),
            ("k", Sprite::Desk),
            ("f", Sprite::Sofa),
            ("g", Sprite::Rug),
            ("p", Sprite::Plant),
        ];
        for (key, sprite) in cases {
            assert_eq!(ShortcutMap::resolve(key), Some(CanvasAction::Add(sprite)));
            assert_eq!(
                ShortcutMap::resolve(&key.to_uppercase()),
                Some(CanvasAction::Add(sprite))
            );
        }
    }

    #[test]
    fn resolve_edit_keys() {
        assert_eq!(ShortcutMap::resolve("r"), Some(CanvasAction::Rotate));
        assert_eq!(ShortcutMap::resolve("R"), Some(CanvasAction::Rotate));
        assert_eq!(ShortcutMap::resolve("s"), Some(CanvasAction::Save));
        assert_eq!(ShortcutMap::resolve("S"), Some(CanvasAction::Save));
        assert_eq!(ShortcutMap::resolve("Backspace"), Some(CanvasAction::Delete));
    }

    #[test]
    fn resolve_unknown_key() {
        assert_eq!(ShortcutMap::resolve("q"), None);
        assert_eq!(ShortcutMap::resolve("7"), None);
        assert_eq!(ShortcutMap::resolve("Delete"), None);
        assert_eq!(ShortcutMap::resolve("bb"), None);
        assert_eq!(ShortcutMap::resolve(""), None);
    }
}
