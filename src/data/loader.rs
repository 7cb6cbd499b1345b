use bevy::asset::{io::Reader, ron, Asset, AssetLoader, LoadContext};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;
use thiserror::Error;

use super::schema::{ItemCatalog, LevelLayout};

/// 用复合扩展名区分同为 .ron 的不同资产类型
pub trait RonAsset: Asset + DeserializeOwned {
    const EXTENSIONS: &'static [&'static str];
}

impl RonAsset for ItemCatalog {
    const EXTENSIONS: &'static [&'static str] = &["items.ron"];
}

impl RonAsset for LevelLayout {
    const EXTENSIONS: &'static [&'static str] = &["level.ron"];
}

pub struct RonAssetLoader<A> {
    _marker: PhantomData<fn() -> A>,
}

impl<A> Default for RonAssetLoader<A> {
    fn default() -> Self {
        Self { _marker: PhantomData }
    }
}

#[derive(Debug, Error)]
pub enum RonAssetLoaderError {
    #[error("Could not load asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Could not interpret bytes as UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl<A: RonAsset> AssetLoader for RonAssetLoader<A> {
    type Asset = A;
    type Settings = ();
    type Error = RonAssetLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext,
    ) -> impl Future<Output = Result<Self::Asset, Self::Error>> + Send {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            parse(&bytes)
        }
    }

    fn extensions(&self) -> &[&str] {
        A::EXTENSIONS
    }
}

fn parse<A: DeserializeOwned>(bytes: &[u8]) -> Result<A, RonAssetLoaderError> {
    let s = std::str::from_utf8(bytes)?;
    Ok(ron::de::from_str(s)?)
}
