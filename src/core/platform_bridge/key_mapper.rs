//=========================================================================
// Key Mapper
//
// Translates winit's logical keys, modifier state and mouse buttons onto
// the engine's portable types.
//
// Responsibilities:
// - Total key translation: every native key yields a `KeyCode`, unknown
//   keys yield `KeyCode::Invalid` (never dropped)
// - Modifier flags by independent bit tests on the native mask
// - Mouse buttons narrowed to Left/Middle/Right
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::{Key, KeyLocation, ModifiersState, NamedKey};

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCode, Modifiers, MouseButton};

//=== Key Translation =====================================================

/// Translates a native logical key onto the portable key set.
///
/// Character keys are mapped by their first character, so `"a"` and
/// `"A"` both give `KeyA`. Dead and unidentified keys give `Invalid`.
pub(crate) fn translate_key(key: &Key, location: KeyLocation) -> KeyCode {
    match key {
        Key::Named(named) => translate_named(*named, location),
        Key::Character(text) => text.chars().next().map_or(KeyCode::Invalid, translate_char),
        Key::Unidentified(_) | Key::Dead(_) => KeyCode::Invalid,
    }
}

fn translate_named(key: NamedKey, location: KeyLocation) -> KeyCode {
    match key {
        //--- Editing / Control --------------------------------------------

        NamedKey::Backspace => KeyCode::Backspace,
        NamedKey::Tab => KeyCode::Tab,
        NamedKey::Clear => KeyCode::Clear,
        NamedKey::Enter => KeyCode::Return,
        NamedKey::Pause => KeyCode::Pause,
        NamedKey::Escape => KeyCode::Escape,
        NamedKey::Space => KeyCode::Space,
        NamedKey::Delete => KeyCode::Delete,

        //--- Navigation ---------------------------------------------------

        NamedKey::ArrowUp => KeyCode::Up,
        NamedKey::ArrowDown => KeyCode::Down,
        NamedKey::ArrowRight => KeyCode::Right,
        NamedKey::ArrowLeft => KeyCode::Left,
        NamedKey::Insert => KeyCode::Insert,
        NamedKey::Home => KeyCode::Home,
        NamedKey::End => KeyCode::End,
        NamedKey::PageUp => KeyCode::PageUp,
        NamedKey::PageDown => KeyCode::PageDown,

        //--- Function Keys ------------------------------------------------

        NamedKey::F1 => KeyCode::F1,
        NamedKey::F2 => KeyCode::F2,
        NamedKey::F3 => KeyCode::F3,
        NamedKey::F4 => KeyCode::F4,
        NamedKey::F5 => KeyCode::F5,
        NamedKey::F6 => KeyCode::F6,
        NamedKey::F7 => KeyCode::F7,
        NamedKey::F8 => KeyCode::F8,
        NamedKey::F9 => KeyCode::F9,
        NamedKey::F10 => KeyCode::F10,
        NamedKey::F11 => KeyCode::F11,
        NamedKey::F12 => KeyCode::F12,
        NamedKey::F13 => KeyCode::F13,
        NamedKey::F14 => KeyCode::F14,
        NamedKey::F15 => KeyCode::F15,

        //--- Locks & Modifiers --------------------------------------------

        NamedKey::NumLock => KeyCode::NumLock,
        NamedKey::CapsLock => KeyCode::CapsLock,
        NamedKey::ScrollLock => KeyCode::ScrollLock,
        NamedKey::Shift => KeyCode::RShift,
        NamedKey::Control => KeyCode::RCtrl,
        NamedKey::Alt => KeyCode::RAlt,
        NamedKey::Super if location == KeyLocation::Right => KeyCode::RSuper,
        NamedKey::Super => KeyCode::LSuper,
        NamedKey::ModeChange => KeyCode::Mode,

        //--- System -------------------------------------------------------

        NamedKey::Help => KeyCode::Help,
        NamedKey::PrintScreen | NamedKey::Print => KeyCode::Print,
        NamedKey::ContextMenu => KeyCode::Menu,
        NamedKey::Power | NamedKey::PowerOff => KeyCode::Power,
        NamedKey::Undo => KeyCode::Undo,

        //--- Unmapped -----------------------------------------------------

        _ => KeyCode::Invalid,
    }
}

fn translate_char(c: char) -> KeyCode {
    match c.to_ascii_lowercase() {
        ' ' => KeyCode::Space,
        '!' => KeyCode::Exclaim,
        '"' => KeyCode::QuoteDbl,
        '#' => KeyCode::Hash,
        '$' => KeyCode::Dollar,
        '&' => KeyCode::Ampersand,
        '\'' => KeyCode::Quote,
        '(' => KeyCode::LeftParen,
        ')' => KeyCode::RightParen,
        '*' => KeyCode::Asterisk,
        '+' => KeyCode::Plus,
        ',' => KeyCode::Comma,
        '-' => KeyCode::Minus,
        '.' => KeyCode::Period,
        '/' => KeyCode::Slash,
        '0' => KeyCode::Digit0,
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        ':' => KeyCode::Colon,
        ';' => KeyCode::Semicolon,
        '<' => KeyCode::Less,
        '=' => KeyCode::Equals,
        '>' => KeyCode::Greater,
        '?' => KeyCode::Question,
        '@' => KeyCode::At,
        '[' => KeyCode::LeftBracket,
        '\\' => KeyCode::Backslash,
        ']' => KeyCode::RightBracket,
        '^' => KeyCode::Caret,
        '_' => KeyCode::Underscore,
        '`' => KeyCode::Backquote,
        'a' => KeyCode::KeyA,
        'b' => KeyCode::KeyB,
        'c' => KeyCode::KeyC,
        'd' => KeyCode::KeyD,
        'e' => KeyCode::KeyE,
        'f' => KeyCode::KeyF,
        'g' => KeyCode::KeyG,
        'h' => KeyCode::KeyH,
        'i' => KeyCode::KeyI,
        'j' => KeyCode::KeyJ,
        'k' => KeyCode::KeyK,
        'l' => KeyCode::KeyL,
        'm' => KeyCode::KeyM,
        'n' => KeyCode::KeyN,
        'o' => KeyCode::KeyO,
        'p' => KeyCode::KeyP,
        'q' => KeyCode::KeyQ,
        'r' => KeyCode::KeyR,
        's' => KeyCode::KeyS,
        't' => KeyCode::KeyT,
        'u' => KeyCode::KeyU,
        'v' => KeyCode::KeyV,
        'w' => KeyCode::KeyW,
        'x' => KeyCode::KeyX,
        'y' => KeyCode::KeyY,
        'z' => KeyCode::KeyZ,
        '~' => KeyCode::Tilde,
        _ => KeyCode::Invalid,
    }
}

//=== Modifier Translation ================================================

/// Converts the native modifier mask to engine modifier flags.
///
/// The Super (Windows / Command) key maps to `META`.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        let mut flags = Modifiers::empty();
        if state.contains(ModifiersState::SHIFT) {
            flags |= Modifiers::SHIFT;
        }
        if state.contains(ModifiersState::ALT) {
            flags |= Modifiers::ALT;
        }
        if state.contains(ModifiersState::CONTROL) {
            flags |= Modifiers::CTRL;
        }
        if state.contains(ModifiersState::SUPER) {
            flags |= Modifiers::META;
        }
        flags
    }
}

//=== Mouse Button Translation ============================================

/// Maps Left/Middle/Right; every other button has no engine equivalent.
pub(crate) fn translate_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        WinitMouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{NativeKey, SmolStr};

    fn character(text: &str) -> Key {
        Key::Character(SmolStr::new(text))
    }

    fn named(key: NamedKey) -> KeyCode {
        translate_key(&Key::Named(key), KeyLocation::Standard)
    }

    //=====================================================================
    // Character Keys
    //=====================================================================

    #[test]
    fn letters_ignore_case() {
        assert_eq!(translate_key(&character("a"), KeyLocation::Standard), KeyCode::KeyA);
        assert_eq!(translate_key(&character("A"), KeyLocation::Standard), KeyCode::KeyA);
        assert_eq!(translate_key(&character("z"), KeyLocation::Standard), KeyCode::KeyZ);
    }

    #[test]
    fn digits_and_punctuation() {
        assert_eq!(translate_key(&character("7"), KeyLocation::Numpad), KeyCode::Digit7);
        assert_eq!(translate_key(&character("!"), KeyLocation::Standard), KeyCode::Exclaim);
        assert_eq!(translate_key(&character("~"), KeyLocation::Standard), KeyCode::Tilde);
        assert_eq!(translate_key(&character("\\"), KeyLocation::Standard), KeyCode::Backslash);
    }

    #[test]
    fn non_ascii_characters_are_invalid() {
        assert_eq!(translate_key(&character("é"), KeyLocation::Standard), KeyCode::Invalid);
        assert_eq!(translate_key(&character("ß"), KeyLocation::Standard), KeyCode::Invalid);
    }

    #[test]
    fn empty_character_is_invalid() {
        assert_eq!(translate_key(&character(""), KeyLocation::Standard), KeyCode::Invalid);
    }

    //=====================================================================
    // Named Keys
    //=====================================================================

    #[test]
    fn named_keys_map() {
        assert_eq!(named(NamedKey::Enter), KeyCode::Return);
        assert_eq!(named(NamedKey::ArrowLeft), KeyCode::Left);
        assert_eq!(named(NamedKey::F15), KeyCode::F15);
        assert_eq!(named(NamedKey::Shift), KeyCode::RShift);
        assert_eq!(named(NamedKey::ContextMenu), KeyCode::Menu);
        assert_eq!(named(NamedKey::PowerOff), KeyCode::Power);
    }

    #[test]
    fn super_key_uses_location() {
        let key = Key::Named(NamedKey::Super);
        assert_eq!(translate_key(&key, KeyLocation::Left), KeyCode::LSuper);
        assert_eq!(translate_key(&key, KeyLocation::Right), KeyCode::RSuper);
    }

    #[test]
    fn unmapped_named_keys_are_invalid() {
        assert_eq!(named(NamedKey::F16), KeyCode::Invalid);
        assert_eq!(named(NamedKey::AudioVolumeUp), KeyCode::Invalid);
        assert_eq!(named(NamedKey::BrowserBack), KeyCode::Invalid);
    }

    #[test]
    fn dead_and_unidentified_keys_are_invalid() {
        assert_eq!(translate_key(&Key::Dead(Some('`')), KeyLocation::Standard), KeyCode::Invalid);
        assert_eq!(
            translate_key(&Key::Unidentified(NativeKey::Unidentified), KeyLocation::Standard),
            KeyCode::Invalid
        );
    }

    /// Printable ASCII outside the portable set (`%`, braces, pipe) falls
    /// back to `Invalid`; everything else gets a real code.
    #[test]
    fn translation_is_total_over_printable_ascii() {
        const UNMAPPED: &[char] = &['%', '{', '|', '}'];

        for byte in 0x20u8..0x7f {
            let c = byte as char;
            let code = translate_key(&character(&c.to_string()), KeyLocation::Standard);
            if UNMAPPED.contains(&c) {
                assert_eq!(code, KeyCode::Invalid, "{:?} has no portable code", c);
            } else {
                assert!(code.is_valid(), "printable {:?} should map, got {:?}", c, code);
            }
        }
    }

    #[test]
    fn control_characters_are_invalid() {
        for byte in 0x00u8..0x20 {
            let text = (byte as char).to_string();
            assert_eq!(translate_key(&character(&text), KeyLocation::Standard), KeyCode::Invalid);
        }
    }

    //=====================================================================
    // Modifiers
    //=====================================================================

    #[test]
    fn modifiers_from_empty_state() {
        assert!(Modifiers::from(ModifiersState::empty()).is_empty());
    }

    #[test]
    fn modifiers_bits_are_independent() {
        let state = ModifiersState::SHIFT | ModifiersState::SUPER;
        let mods = Modifiers::from(state);
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(mods.contains(Modifiers::META));
        assert!(!mods.contains(Modifiers::CTRL));
        assert!(!mods.contains(Modifiers::ALT));
    }

    #[test]
    fn modifiers_all_set() {
        let state = ModifiersState::SHIFT
            | ModifiersState::CONTROL
            | ModifiersState::ALT
            | ModifiersState::SUPER;
        assert_eq!(Modifiers::from(state), Modifiers::all());
    }

    //=====================================================================
    // Mouse Buttons
    //=====================================================================

    #[test]
    fn standard_buttons_map() {
        assert_eq!(translate_button(WinitMouseButton::Left), Some(MouseButton::Left));
        assert_eq!(translate_button(WinitMouseButton::Middle), Some(MouseButton::Middle));
        assert_eq!(translate_button(WinitMouseButton::Right), Some(MouseButton::Right));
    }

    #[test]
    fn extra_buttons_have_no_mapping() {
        assert_eq!(translate_button(WinitMouseButton::Back), None);
        assert_eq!(translate_button(WinitMouseButton::Forward), None);
        assert_eq!(translate_button(WinitMouseButton::Other(7)), None);
    }
}
