//! Sequence assembly and video encoding.
//!
//! [`assemble`] turns an ordered bullet list into a [`SlideSequence`]: one
//! slide per bullet, every slide tagged with the same display duration.
//! Slides are rendered strictly in bullet order — the encoder consumes
//! frames in sequence order only, and the video's narrative order is the
//! document's.
//!
//! [`write_video`] does not implement an MP4 encoder. Like most of the
//! ecosystem it wraps the system `ffmpeg` binary: raw RGB24 frames are
//! streamed to its stdin, each slide's frame repeated for its whole
//! duration, and ffmpeg muxes H.264/yuv420p with no audio track. A missing
//! binary or a non-zero exit is a structured, fatal error — there is no
//! partial-file cleanup.

use crate::config::SlideStyle;
use crate::error::NotereelError;
use crate::pipeline::compose::{self, Slide};
use crate::pipeline::font::FontBook;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// An ordered list of slides sharing one display duration.
pub struct SlideSequence {
    /// Slides in bullet order.
    pub slides: Vec<Slide>,
    /// Seconds each slide stays on screen.
    pub slide_duration_secs: f32,
    /// Output frame rate.
    pub fps: u32,
}

impl SlideSequence {
    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the sequence holds no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Encoded frames per slide at the configured rate, never zero.
    pub fn frames_per_slide(&self) -> u64 {
        ((self.slide_duration_secs as f64 * self.fps as f64).round() as u64).max(1)
    }

    /// Nominal playback length in seconds.
    pub fn total_duration_secs(&self) -> f32 {
        self.slides.len() as f32 * self.slide_duration_secs
    }
}

/// Render one slide per bullet, preserving order, all with `duration`.
pub fn assemble(
    bullets: &[String],
    style: &SlideStyle,
    fonts: &FontBook,
    slide_duration_secs: f32,
    fps: u32,
) -> SlideSequence {
    let slides = bullets
        .iter()
        .map(|b| compose::compose_slide(b, style, fonts))
        .collect::<Vec<_>>();
    debug!(
        "assembled {} slides at {:.2}s each",
        slides.len(),
        slide_duration_secs
    );
    SlideSequence {
        slides,
        slide_duration_secs,
        fps,
    }
}

/// Encode the sequence to `out_path`, creating the parent directory if
/// needed.
pub fn write_video(seq: &SlideSequence, out_path: &Path) -> Result<(), NotereelError> {
    if seq.is_empty() {
        return Err(NotereelError::Internal(
            "cannot encode an empty slide sequence".into(),
        ));
    }

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| NotereelError::OutputWriteFailed {
                path: out_path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let (width, height) = (seq.slides[0].image.width(), seq.slides[0].image.height());
    let args = ffmpeg_args(width, height, seq.fps, out_path);
    debug!("spawning ffmpeg {}", args.join(" "));

    let mut child = Command::new("ffmpeg")
        .args(&args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotereelError::FfmpegMissing
            } else {
                NotereelError::Internal(format!("failed to spawn ffmpeg: {e}"))
            }
        })?;

    // Stream every frame; a broken pipe means ffmpeg already failed, so
    // stop writing and let the exit status report the real cause.
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| NotereelError::Internal("ffmpeg stdin unavailable".into()))?;
    let frames_per_slide = seq.frames_per_slide();
    'feed: for slide in &seq.slides {
        let raw = slide.image.as_raw();
        for _ in 0..frames_per_slide {
            match stdin.write_all(raw) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => break 'feed,
                Err(e) => {
                    return Err(NotereelError::Internal(format!(
                        "failed to stream frame to ffmpeg: {e}"
                    )))
                }
            }
        }
    }
    drop(stdin);

    let output = child
        .wait_with_output()
        .map_err(|e| NotereelError::Internal(format!("failed to wait for ffmpeg: {e}")))?;
    if !output.status.success() {
        return Err(NotereelError::EncodeFailed {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    info!(
        "encoded {} slides × {} frames to {}",
        seq.len(),
        frames_per_slide,
        out_path.display()
    );
    Ok(())
}

/// ffmpeg invocation: raw RGB24 on stdin, H.264 yuv420p MP4 out, no audio.
fn ffmpeg_args(width: u32, height: u32, fps: u32, out_path: &Path) -> Vec<String> {
    vec![
        "-y".into(),
        "-hide_banner".into(),
        "-loglevel".into(),
        "error".into(),
        "-f".into(),
        "rawvideo".into(),
        "-pix_fmt".into(),
        "rgb24".into(),
        "-video_size".into(),
        format!("{width}x{height}"),
        "-framerate".into(),
        fps.to_string(),
        "-i".into(),
        "-".into(),
        "-c:v".into(),
        "libx264".into(),
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-an".into(),
        out_path.to_string_lossy().into_owned(),
    ]
}

/// True when the system ffmpeg binary is runnable.
pub fn is_ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn seq_of(n: usize, dur: f32, fps: u32) -> SlideSequence {
        let slides = (0..n)
            .map(|i| Slide {
                image: image::RgbImage::new(4, 4),
                bullet: format!("bullet {i}"),
            })
            .collect();
        SlideSequence {
            slides,
            slide_duration_secs: dur,
            fps,
        }
    }

    #[test]
    fn frames_per_slide_rounds_and_floors_at_one() {
        assert_eq!(seq_of(1, 2.0, 24).frames_per_slide(), 48);
        assert_eq!(seq_of(1, 3.5, 24).frames_per_slide(), 84);
        // Far below one frame still encodes a single frame.
        assert_eq!(seq_of(1, 0.001, 24).frames_per_slide(), 1);
    }

    #[test]
    fn total_duration_is_count_times_duration() {
        let seq = seq_of(3, 2.0, 24);
        assert_eq!(seq.len(), 3);
        assert!((seq.total_duration_secs() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn ffmpeg_args_describe_the_stream() {
        let args = ffmpeg_args(1080, 1920, 24, &PathBuf::from("output/reel.mp4"));
        let joined = args.join(" ");
        assert!(joined.contains("-f rawvideo"));
        assert!(joined.contains("-pix_fmt rgb24"));
        assert!(joined.contains("-video_size 1080x1920"));
        assert!(joined.contains("-framerate 24"));
        assert!(joined.contains("-c:v libx264"));
        assert!(joined.contains("-an"));
        assert!(joined.ends_with("output/reel.mp4"));
        // Reads from stdin, not a file.
        assert!(args.windows(2).any(|w| w[0] == "-i" && w[1] == "-"));
    }

    #[test]
    fn empty_sequence_is_rejected_before_spawning() {
        let seq = seq_of(0, 2.0, 24);
        let err = write_video(&seq, &PathBuf::from("/tmp/never-written.mp4")).unwrap_err();
        assert!(matches!(err, NotereelError::Internal(_)));
    }
}
