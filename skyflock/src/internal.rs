/// ! Common imports.
pub use anyhow::anyhow;
pub use anyhow::Context;
pub use anyhow::Error;
pub use anyhow::Result;
pub use bytemuck::Pod;
pub use bytemuck::Zeroable;
pub use flate2::read::GzDecoder;
pub use image::DynamicImage;
pub use image::GenericImageView;
pub use log::error;
pub use log::info;
pub use log::trace;
pub use log::warn;
pub use rand::Rng;
pub use rand_xoshiro::rand_core::SeedableRng;
pub use rand_xoshiro::Xoshiro256PlusPlus;
pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use wgpu::util::DeviceExt;
pub use winit::event::ElementState;
pub use winit::event::VirtualKeyCode;
pub use winit::event::WindowEvent;
pub use winit::window::Window;

pub use matrix::*;
pub use vector::*;

pub use crate::color::*;
pub use crate::flock::*;
pub use crate::geom::*;
pub use crate::graphics::*;
pub use crate::resources::*;
pub use crate::settings::*;
pub use crate::shell::*;
pub use crate::util::*;

pub use std::cmp::Ordering;
pub use std::fmt;
pub use std::fs::File;
pub use std::io::BufReader;
pub use std::io::Read;
pub use std::mem;
pub use std::ops::Mul;
pub use std::ops::Range;
pub use std::path::Path;
pub use std::path::PathBuf;
pub use std::sync::mpsc;
pub use std::sync::mpsc::Receiver;
pub use std::sync::Arc;
pub use std::time::Duration;
pub use std::time::Instant;

pub type Set<T> = fnv::FnvHashSet<T>;

/// Shorthand for Default::default()
pub fn default<T: Default>() -> T {
	T::default()
}
