use std::path::{Path, PathBuf};
use std::thread;

use anyhow::Context;
use crossbeam_channel::{bounded, Receiver};

// ---------------------------------------------------------------------------
// Background photo decode — one thread, one message, then done
// ---------------------------------------------------------------------------

/// A photo decoded to tightly-packed RGBA8 rows, top-down.
#[derive(Debug)]
pub struct DecodedPhoto {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode `path` off the render thread so startup frames are not blocked on
/// disk and PNG inflation. The receiver yields exactly one message and the
/// sender hangs up.
pub fn spawn_loader(path: PathBuf) -> Receiver<anyhow::Result<DecodedPhoto>> {
    let (tx, rx) = bounded(1);
    thread::Builder::new()
        .name("photo-loader".into())
        .spawn(move || {
            let _ = tx.send(decode(&path));
        })
        .expect("failed to spawn photo-loader thread");
    rx
}

fn decode(path: &Path) -> anyhow::Result<DecodedPhoto> {
    let image = image::open(path)
        .with_context(|| format!("failed to open photo {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Ok(DecodedPhoto {
        width,
        height,
        pixels: image.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_the_offending_path() {
        let err = decode(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(
            format!("{err:#}").contains("/nonexistent/photo.png"),
            "error should name the path: {err:#}"
        );
    }

    #[test]
    fn shipped_photo_decodes_to_tight_rgba_rows() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/photo.png");
        let photo = decode(&path).expect("bundled photo must decode");
        assert!(photo.width > 0 && photo.height > 0);
        assert_eq!(
            photo.pixels.len(),
            (4 * photo.width * photo.height) as usize
        );
    }

    #[test]
    fn loader_thread_delivers_exactly_one_message() {
        let rx = spawn_loader(PathBuf::from("/nonexistent/photo.png"));
        let first = rx.recv().expect("loader must send its result");
        assert!(first.is_err());
        // Sender dropped after the single send.
        assert!(rx.recv().is_err());
    }
}
