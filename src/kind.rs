//! Enumerated classification codes carried by every COF layer.
//!
//! The codes are display metadata only: every raw value converts into one of
//! these enums, values the game never defined land in an `Unknown` variant
//! with an empty label.

use lazy_static::lazy_static;

use std::collections::HashMap;

/// Body-part slot a layer is drawn into.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum LayerType {
    Head,
    Torso,
    Legs,
    RightArm,
    LeftArm,
    RightHand,
    LeftHand,
    Shield,
    Special1,
    Special2,
    Special3,
    Special4,
    Special5,
    Special6,
    Special7,
    Special8,
    Unknown(u8),
}

impl LayerType {
    pub const ALL: [LayerType; 16] = [
        LayerType::Head,
        LayerType::Torso,
        LayerType::Legs,
        LayerType::RightArm,
        LayerType::LeftArm,
        LayerType::RightHand,
        LayerType::LeftHand,
        LayerType::Shield,
        LayerType::Special1,
        LayerType::Special2,
        LayerType::Special3,
        LayerType::Special4,
        LayerType::Special5,
        LayerType::Special6,
        LayerType::Special7,
        LayerType::Special8,
    ];

    pub fn name(self) -> &'static str {
        use LayerType::*;
        match self {
            Head => "Head",
            Torso => "Torso",
            Legs => "Legs",
            RightArm => "Right Arm",
            LeftArm => "Left Arm",
            RightHand => "Right Hand",
            LeftHand => "Left Hand",
            Shield => "Shield",
            Special1 => "Special 1",
            Special2 => "Special 2",
            Special3 => "Special 3",
            Special4 => "Special 4",
            Special5 => "Special 5",
            Special6 => "Special 6",
            Special7 => "Special 7",
            Special8 => "Special 8",
            Unknown(_) => "",
        }
    }

    /// Two letter code used in the game's asset paths, e.g. `TR` for the torso.
    pub fn token(self) -> &'static str {
        use LayerType::*;
        match self {
            Head => "HD",
            Torso => "TR",
            Legs => "LG",
            RightArm => "RA",
            LeftArm => "LA",
            RightHand => "RH",
            LeftHand => "LH",
            Shield => "SH",
            Special1 => "S1",
            Special2 => "S2",
            Special3 => "S3",
            Special4 => "S4",
            Special5 => "S5",
            Special6 => "S6",
            Special7 => "S7",
            Special8 => "S8",
            Unknown(_) => "",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        LAYER_TOKENS.get(&token.to_ascii_uppercase()[..]).copied()
    }
}

impl From<u8> for LayerType {
    fn from(n: u8) -> Self {
        use LayerType::*;
        match n {
            0 => Head,
            1 => Torso,
            2 => Legs,
            3 => RightArm,
            4 => LeftArm,
            5 => RightHand,
            6 => LeftHand,
            7 => Shield,
            8 => Special1,
            9 => Special2,
            10 => Special3,
            11 => Special4,
            12 => Special5,
            13 => Special6,
            14 => Special7,
            15 => Special8,
            n => Unknown(n),
        }
    }
}

impl From<LayerType> for u8 {
    fn from(kind: LayerType) -> Self {
        match kind {
            LayerType::Unknown(n) => n,
            kind => LayerType::ALL.iter().position(|&x| x == kind).unwrap_or(0) as u8,
        }
    }
}

/// Label of a layer type given either the raw code or the enum.
pub fn layer_name<T: Into<LayerType>>(kind: T) -> &'static str {
    kind.into().name()
}

/// Blend mode used when compositing a layer.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DrawEffect {
    PctTransparency25,
    PctTransparency50,
    PctTransparency75,
    Modulate,
    Burn,
    Normal,
    Mod2XTrans,
    Mod2X,
    None,
    Unknown(u8),
}

impl DrawEffect {
    pub const ALL: [DrawEffect; 9] = [
        DrawEffect::PctTransparency25,
        DrawEffect::PctTransparency50,
        DrawEffect::PctTransparency75,
        DrawEffect::Modulate,
        DrawEffect::Burn,
        DrawEffect::Normal,
        DrawEffect::Mod2XTrans,
        DrawEffect::Mod2X,
        DrawEffect::None,
    ];

    pub fn name(self) -> &'static str {
        use DrawEffect::*;
        match self {
            PctTransparency25 => "25% alpha",
            PctTransparency50 => "50% alpha",
            PctTransparency75 => "75% alpha",
            Modulate => "Modulate",
            Burn => "Burn",
            Normal => "Normal",
            Mod2XTrans => "Mod2XTrans",
            Mod2X => "Mod2X",
            None => "None",
            Unknown(_) => "",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_name(name: &str) -> Option<Self> {
        DRAW_EFFECT_NAMES.get(&name.to_ascii_lowercase()[..]).copied()
    }
}

impl From<u8> for DrawEffect {
    fn from(n: u8) -> Self {
        DrawEffect::ALL
            .get(n as usize)
            .copied()
            .unwrap_or(DrawEffect::Unknown(n))
    }
}

impl From<DrawEffect> for u8 {
    fn from(effect: DrawEffect) -> Self {
        match effect {
            DrawEffect::Unknown(n) => n,
            effect => DrawEffect::ALL.iter().position(|&x| x == effect).unwrap_or(0) as u8,
        }
    }
}

/// Weapon handling pose selecting the animation variant of a layer.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum WeaponClass {
    None,
    HandToHand,
    Bow,
    OneHandSwing,
    OneHandThrust,
    Staff,
    TwoHandSwing,
    TwoHandThrust,
    Crossbow,
    LeftJabRightSwing,
    LeftJabRightThrust,
    LeftSwingRightSwing,
    LeftSwingRightThrust,
    OneHandToHand,
    TwoHandToHand,
    Unknown(u8),
}

impl WeaponClass {
    pub const ALL: [WeaponClass; 15] = [
        WeaponClass::None,
        WeaponClass::HandToHand,
        WeaponClass::Bow,
        WeaponClass::OneHandSwing,
        WeaponClass::OneHandThrust,
        WeaponClass::Staff,
        WeaponClass::TwoHandSwing,
        WeaponClass::TwoHandThrust,
        WeaponClass::Crossbow,
        WeaponClass::LeftJabRightSwing,
        WeaponClass::LeftJabRightThrust,
        WeaponClass::LeftSwingRightSwing,
        WeaponClass::LeftSwingRightThrust,
        WeaponClass::OneHandToHand,
        WeaponClass::TwoHandToHand,
    ];

    pub fn name(self) -> &'static str {
        use WeaponClass::*;
        match self {
            None => "None",
            HandToHand => "Hand To Hand",
            Bow => "Bow",
            OneHandSwing => "One Hand Swing",
            OneHandThrust => "One Hand Thrust",
            Staff => "Staff",
            TwoHandSwing => "Two Hand Swing",
            TwoHandThrust => "Two Hand Thrust",
            Crossbow => "Crossbow",
            LeftJabRightSwing => "Left Jab Right Swing",
            LeftJabRightThrust => "Left Jab Right Thrust",
            LeftSwingRightSwing => "Left Swing Right Swing",
            LeftSwingRightThrust => "Left Swing Right Thrust",
            OneHandToHand => "One Hand To Hand",
            TwoHandToHand => "Two Hand To Hand",
            Unknown(_) => "",
        }
    }

    /// Three letter code, e.g. `1hs`. `None` has an empty token.
    pub fn token(self) -> &'static str {
        use WeaponClass::*;
        match self {
            None => "",
            HandToHand => "hth",
            Bow => "bow",
            OneHandSwing => "1hs",
            OneHandThrust => "1ht",
            Staff => "stf",
            TwoHandSwing => "2hs",
            TwoHandThrust => "2ht",
            Crossbow => "xbw",
            LeftJabRightSwing => "1js",
            LeftJabRightThrust => "1jt",
            LeftSwingRightSwing => "1ss",
            LeftSwingRightThrust => "1st",
            OneHandToHand => "ht1",
            TwoHandToHand => "ht2",
            Unknown(_) => "",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        WEAPON_TOKENS.get(&token.to_ascii_lowercase()[..]).copied()
    }
}

impl From<u8> for WeaponClass {
    fn from(n: u8) -> Self {
        WeaponClass::ALL
            .get(n as usize)
            .copied()
            .unwrap_or(WeaponClass::Unknown(n))
    }
}

impl From<WeaponClass> for u8 {
    fn from(class: WeaponClass) -> Self {
        match class {
            WeaponClass::Unknown(n) => n,
            class => WeaponClass::ALL.iter().position(|&x| x == class).unwrap_or(0) as u8,
        }
    }
}

lazy_static! {
    static ref LAYER_TOKENS: HashMap<&'static str, LayerType> =
        LayerType::ALL.iter().map(|&x| (x.token(), x)).collect();
    static ref WEAPON_TOKENS: HashMap<&'static str, WeaponClass> =
        WeaponClass::ALL.iter().map(|&x| (x.token(), x)).collect();
    static ref DRAW_EFFECT_NAMES: HashMap<String, DrawEffect> = DrawEffect::ALL
        .iter()
        .map(|&x| (x.name().to_ascii_lowercase(), x))
        .collect();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw_and_enum_resolve_to_same_label() {
        for (code, kind) in LayerType::ALL.iter().enumerate() {
            assert_eq!(layer_name(code as u8), layer_name(*kind));
            assert_eq!(u8::from(*kind), code as u8);
        }
        assert_eq!(layer_name(1u8), "Torso");
        assert_eq!(layer_name(LayerType::Special8), "Special 8");
    }

    #[test]
    fn unknown_codes_have_empty_labels() {
        assert_eq!(LayerType::from(16), LayerType::Unknown(16));
        assert_eq!(layer_name(200u8), "");
        assert_eq!(DrawEffect::from(9).name(), "");
        assert_eq!(WeaponClass::from(99).name(), "");
        assert_eq!(u8::from(WeaponClass::from(99)), 99);
    }

    #[test]
    fn labels_are_distinct() {
        use std::collections::HashSet;

        let layers: HashSet<_> = LayerType::ALL.iter().map(|x| x.name()).collect();
        let effects: HashSet<_> = DrawEffect::ALL.iter().map(|x| x.name()).collect();
        let weapons: HashSet<_> = WeaponClass::ALL.iter().map(|x| x.name()).collect();
        assert_eq!(layers.len(), LayerType::ALL.len());
        assert_eq!(effects.len(), DrawEffect::ALL.len());
        assert_eq!(weapons.len(), WeaponClass::ALL.len());
    }

    #[test]
    fn draw_effect_codes() {
        assert_eq!(DrawEffect::from(0), DrawEffect::PctTransparency25);
        assert_eq!(DrawEffect::from(5).name(), "Normal");
        assert_eq!(DrawEffect::from(8), DrawEffect::None);
        assert_eq!(DrawEffect::from_name("mod2xtrans"), Some(DrawEffect::Mod2XTrans));
        assert_eq!(DrawEffect::from_name("75% ALPHA"), Some(DrawEffect::PctTransparency75));
        assert_eq!(DrawEffect::from_name("glow"), None);
    }

    #[test]
    fn token_lookup() {
        assert_eq!(LayerType::from_token("tr"), Some(LayerType::Torso));
        assert_eq!(LayerType::from_token("S8"), Some(LayerType::Special8));
        assert_eq!(LayerType::from_token("XX"), None);
        assert_eq!(WeaponClass::from_token("1HS"), Some(WeaponClass::OneHandSwing));
        assert_eq!(WeaponClass::from_token(""), Some(WeaponClass::None));
        assert_eq!(WeaponClass::from(14).token(), "ht2");
    }
}
