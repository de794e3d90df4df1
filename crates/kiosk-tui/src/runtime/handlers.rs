//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return a `UiEvent`; the runtime
//! spawns them with `spawn_effect` and routes the result through the inbox.
//! They do NOT mutate state directly.

use std::path::{Path, PathBuf};

use fast_image_resize as fir;

use crate::events::{PixelGrid, UiEvent};
use kiosk_core::contact::ContactFields;

/// POSTs the contact form and reports the outcome.
pub async fn submit_contact(
    client: reqwest::Client,
    action: String,
    fields: ContactFields,
) -> UiEvent {
    let outcome = kiosk_core::contact::submit(&client, &action, &fields).await;
    UiEvent::SubmitFinished { outcome }
}

/// Decodes a gallery image into a half-block pixel grid.
///
/// Decode and resize are CPU-bound, so they run on the blocking pool.
pub async fn load_image(index: usize, path: PathBuf, max_cells: (u16, u16)) -> UiEvent {
    tracing::debug!(index, path = %path.display(), "decoding gallery image");
    let result = tokio::task::spawn_blocking(move || decode_to_grid(&path, max_cells)).await;
    match result {
        Ok(Ok(grid)) => UiEvent::ImageLoaded { index, grid },
        Ok(Err(error)) => UiEvent::ImageFailed { index, error },
        Err(join_error) => UiEvent::ImageFailed {
            index,
            error: format!("decode task failed: {join_error}"),
        },
    }
}

/// Decodes and downscales an image to fit `max_cells` terminal cells.
///
/// Each cell shows two vertically stacked pixels, so the pixel bounds are
/// `max_cells.0` wide and `max_cells.1 * 2` tall. Images are never upscaled
/// and the output height is always even.
fn decode_to_grid(path: &Path, max_cells: (u16, u16)) -> Result<PixelGrid, String> {
    let max_w = u32::from(max_cells.0.max(1));
    let max_h = u32::from(max_cells.1.max(1)) * 2;

    let reader = image::ImageReader::open(path)
        .map_err(|e| format!("{}: {e}", path.display()))?
        .with_guessed_format()
        .map_err(|e| format!("decode: {e}"))?;
    let img = reader.decode().map_err(|e| format!("decode: {e}"))?;

    let (src_w, src_h) = (img.width().max(1), img.height().max(1));
    let scale = f64::min(
        f64::from(max_w) / f64::from(src_w),
        f64::from(max_h) / f64::from(src_h),
    )
    .min(1.0);
    let dst_w = ((f64::from(src_w) * scale) as u32).max(1);
    let dst_h = (((f64::from(src_h) * scale) as u32).max(2) / 2) * 2;

    let rgb = img.to_rgb8();
    let pixels = if (src_w, src_h) == (dst_w, dst_h) {
        rgb.into_raw()
    } else {
        let src_image = fir::images::Image::from_vec_u8(
            src_w,
            src_h,
            rgb.into_raw(),
            fir::PixelType::U8x3,
        )
        .map_err(|e| format!("resize: {e}"))?;

        let mut dst_image = fir::images::Image::new(dst_w, dst_h, fir::PixelType::U8x3);
        let mut resizer = fir::Resizer::new();
        let options =
            fir::ResizeOptions::new().resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::Bilinear));
        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| format!("resize: {e}"))?;
        dst_image.into_vec()
    };

    let grid_pixels = pixels
        .chunks_exact(3)
        .map(|px| (px[0], px[1], px[2]))
        .collect();

    Ok(PixelGrid {
        cols: dst_w as u16,
        rows: (dst_h / 2) as u16,
        pixels: grid_pixels,
    })
}
