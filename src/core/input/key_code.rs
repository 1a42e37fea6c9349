//=========================================================================
// Portable Key Codes
//
// The engine-facing key set. Every native key identifier delivered by the
// toolkit is translated onto exactly one of these values; anything the
// engine has no name for becomes `KeyCode::Invalid`.
//
// Codes name the key's meaning (the logical key), not its physical
// position: `KeyA` is produced for both `a` and `A`, and `Exclaim` for
// the `!` character however the layout produces it.
//
//=========================================================================

//=== KeyCode =============================================================

/// Logical key identifier understood by the engine.
///
/// Coverage:
/// - Editing and control keys (Backspace, Tab, Return, Escape, ...)
/// - Printable ASCII punctuation
/// - Digits and letters
/// - Navigation keys and F1-F15
/// - Lock and modifier keys
/// - A handful of system keys (Help, Print, Menu, Power, Undo)
///
/// `Invalid` is the explicit sentinel for keys outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyCode {
    /// Sentinel for keys the engine has no code for.
    #[default]
    Invalid,

    //--- Editing / Control ------------------------------------------------

    Backspace,
    Tab,
    Clear,
    Return,
    Pause,
    Escape,
    Space,
    Delete,

    //--- Punctuation ------------------------------------------------------

    Exclaim,
    QuoteDbl,
    Hash,
    Dollar,
    Ampersand,
    Quote,
    LeftParen,
    RightParen,
    Asterisk,
    Plus,
    Comma,
    Minus,
    Period,
    Slash,
    Colon,
    Semicolon,
    Less,
    Equals,
    Greater,
    Question,
    At,
    LeftBracket,
    Backslash,
    RightBracket,
    Caret,
    Underscore,
    Backquote,
    Tilde,

    //--- Digits -----------------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Letters ----------------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Navigation -------------------------------------------------------

    Up,
    Down,
    Right,
    Left,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6, F7, F8,
    F9, F10, F11, F12, F13, F14, F15,

    //--- Locks & Modifiers ------------------------------------------------

    NumLock,
    CapsLock,
    ScrollLock,
    RShift,
    RCtrl,
    RAlt,
    LSuper,
    RSuper,
    Mode,

    //--- System -----------------------------------------------------------

    Help,
    Print,
    SysReq,
    Menu,
    Power,
    Undo,
}

impl KeyCode {
    /// Returns `true` for every code except the `Invalid` sentinel.
    pub fn is_valid(self) -> bool {
        self != KeyCode::Invalid
    }

    /// Returns `true` for the lock and modifier keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::RShift
                | KeyCode::RCtrl
                | KeyCode::RAlt
                | KeyCode::LSuper
                | KeyCode::RSuper
                | KeyCode::Mode
                | KeyCode::NumLock
                | KeyCode::CapsLock
                | KeyCode::ScrollLock
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
