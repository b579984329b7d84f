// src/ui/images.rs
//
// Result images arrive as URL strings. This cache fetches and decodes each
// one once on the tokio runtime, hands the pixels back to the main thread
// as an event, and uploads them to an egui texture on the next frame.

use bevy::prelude::*;
use bevy_egui::egui;
use bevy_tokio_tasks::TokioTasksRuntime;
use std::collections::HashMap;

/// Raw pixels produced by a background fetch, before texture upload.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Sent from the fetch task back to the main thread.
#[derive(Event, Debug, Clone)]
pub struct ImageFetched {
    pub url: String,
    pub result: Result<DecodedImage, String>,
}

pub enum ImageSlot {
    Pending,
    Decoded(DecodedImage),
    Ready(egui::TextureHandle),
    Failed(String),
}

#[derive(Resource, Default)]
pub struct ImageTextureCache {
    slots: HashMap<String, ImageSlot>,
}

impl ImageTextureCache {
    /// Starts a fetch for any URL not seen before. Safe to call every
    /// frame; only the first call per URL spawns work.
    pub fn ensure(&mut self, url: &str, runtime: &TokioTasksRuntime) {
        if self.slots.contains_key(url) {
            return;
        }
        self.slots.insert(url.to_string(), ImageSlot::Pending);

        let url = url.to_string();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = fetch_and_decode(&url).await;
            if let Err(error) = &result {
                warn!("Image fetch failed for '{}': {}", url, error);
            }
            ctx.run_on_main_thread(move |ctx| {
                ctx.world.send_event(ImageFetched { url, result });
            })
            .await;
        });
    }

    pub fn slot(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.get(url)
    }

    fn store(&mut self, url: String, result: Result<DecodedImage, String>) {
        let slot = match result {
            Ok(decoded) => ImageSlot::Decoded(decoded),
            Err(error) => ImageSlot::Failed(error),
        };
        self.slots.insert(url, slot);
    }

    /// Uploads any decoded-but-not-yet-textured slots. Called once per
    /// frame from the egui pass, which is the only place a context is
    /// available.
    pub fn upload_decoded(&mut self, ctx: &egui::Context) {
        for (url, slot) in self.slots.iter_mut() {
            if let ImageSlot::Decoded(decoded) = slot {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [decoded.width, decoded.height],
                    &decoded.rgba,
                );
                let texture =
                    ctx.load_texture(url.clone(), image, egui::TextureOptions::LINEAR);
                *slot = ImageSlot::Ready(texture);
            }
        }
    }
}

/// Moves fetch results into the cache.
pub fn apply_fetched_images(
    mut events: EventReader<ImageFetched>,
    mut cache: ResMut<ImageTextureCache>,
) {
    for event in events.read() {
        cache.store(event.url.clone(), event.result.clone());
    }
}

async fn fetch_and_decode(url: &str) -> Result<DecodedImage, String> {
    let bytes = fetch_bytes(url).await?;
    decode_rgba(&bytes)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        let response = reqwest::get(url)
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|error| error.to_string())?;
        let bytes = response.bytes().await.map_err(|error| error.to_string())?;
        Ok(bytes.to_vec())
    } else {
        // Non-URL sources are treated as local paths, same as the icon
        // loading path: read bytes, decode below.
        tokio::fs::read(url).await.map_err(|error| error.to_string())
    }
}

fn decode_rgba(bytes: &[u8]) -> Result<DecodedImage, String> {
    let image = image::load_from_memory(bytes).map_err(|error| error.to_string())?;
    let buffer = image.into_rgba8();
    let (width, height) = buffer.dimensions();
    Ok(DecodedImage {
        width: width as usize,
        height: height as usize,
        rgba: buffer.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_garbage_bytes() {
        assert!(decode_rgba(&[0, 1, 2, 3]).is_err());
    }

    #[tokio::test]
    async fn fetch_reports_missing_local_files() {
        let result = fetch_bytes("definitely/not/a/file.png").await;
        assert!(result.is_err());
    }
}
