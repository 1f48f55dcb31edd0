use anyhow::{Context, Result};
use cof::*;
use serde::{Deserialize, Serialize};

use std::path::PathBuf;

#[derive(Default, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    /// Fields of layers created by `add` unless given on the command line.
    pub layer: LayerDescriptor,
    pub output: Option<PathBuf>,
}

/// Text form of a composite object.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct CofDescriptor {
    pub directions: usize,
    pub frames_per_direction: usize,
    #[serde(default)]
    pub speed: u16,
    pub priority: Vec<Vec<Vec<usize>>>,
    pub layers: Vec<LayerDescriptor>,
}

/// A code given either as its raw number or by name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Code {
    Raw(u8),
    Name(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LayerDescriptor {
    #[serde(rename = "type")]
    pub kind: Code,
    pub shadow: u8,
    pub selectable: bool,
    pub transparent: bool,
    pub draw_effect: Code,
    pub weapon_class: Code,
}

impl Default for LayerDescriptor {
    fn default() -> Self {
        Self::from(&Layer::new(LayerType::Head))
    }
}

pub fn layer_type(code: &Code) -> Result<LayerType> {
    match code {
        Code::Raw(n) => Ok(LayerType::from(*n)),
        Code::Name(s) => LayerType::from_token(s).context(format!("unknown layer type `{}`", s)),
    }
}

pub fn draw_effect(code: &Code) -> Result<DrawEffect> {
    match code {
        Code::Raw(n) => Ok(DrawEffect::from(*n)),
        Code::Name(s) => DrawEffect::from_name(s).context(format!("unknown draw effect `{}`", s)),
    }
}

pub fn weapon_class(code: &Code) -> Result<WeaponClass> {
    match code {
        Code::Raw(n) => Ok(WeaponClass::from(*n)),
        Code::Name(s) => {
            WeaponClass::from_token(s).context(format!("unknown weapon class `{}`", s))
        }
    }
}

impl LayerDescriptor {
    pub fn to_layer(&self) -> Result<Layer> {
        Ok(Layer {
            kind: layer_type(&self.kind)?,
            shadow: self.shadow,
            selectable: self.selectable,
            transparent: self.transparent,
            draw_effect: draw_effect(&self.draw_effect)?,
            weapon_class: weapon_class(&self.weapon_class)?,
        })
    }
}

fn named(token: &str, raw: u8) -> Code {
    if token.is_empty() {
        Code::Raw(raw)
    } else {
        Code::Name(token.to_string())
    }
}

impl From<&Layer> for LayerDescriptor {
    fn from(layer: &Layer) -> Self {
        Self {
            kind: named(layer.kind.token(), layer.kind.into()),
            shadow: layer.shadow,
            selectable: layer.selectable,
            transparent: layer.transparent,
            draw_effect: named(layer.draw_effect.name(), layer.draw_effect.into()),
            weapon_class: named(layer.weapon_class.token(), layer.weapon_class.into()),
        }
    }
}

impl CofDescriptor {
    pub fn to_cof(&self) -> Result<Cof> {
        let layers = self
            .layers
            .iter()
            .enumerate()
            .map(|(i, x)| x.to_layer().with_context(|| format!("layer {}", i)))
            .collect::<Result<Vec<_>>>()?;
        let cof = Cof::new(
            layers,
            self.directions,
            self.frames_per_direction,
            self.speed,
            self.priority.clone(),
        )?;
        Ok(cof)
    }
}

impl From<&Cof> for CofDescriptor {
    fn from(cof: &Cof) -> Self {
        Self {
            directions: cof.directions(),
            frames_per_direction: cof.frames_per_direction,
            speed: cof.speed,
            priority: cof.priority().to_vec(),
            layers: cof.layers().iter().map(LayerDescriptor::from).collect(),
        }
    }
}
