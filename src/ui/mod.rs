pub mod page;

use std::path::{Path, PathBuf};

pub use page::render_page;

/// Hero image found at startup, if any.
#[derive(Debug, Clone)]
pub struct HeroImage {
    /// Directory served under `/images`.
    pub dir: PathBuf,
    /// URL the page links to.
    pub url: String,
}

/// Look for `relative` under each root in order. Absence is not an error.
pub fn find_hero_image(roots: &[PathBuf], relative: &str) -> Option<HeroImage> {
    let relative = Path::new(relative);
    let file_name = relative.file_name()?.to_string_lossy().to_string();

    roots.iter().find_map(|root| {
        let path = root.join(relative);
        if !path.is_file() {
            return None;
        }

        let dir = path.parent()?.to_path_buf();
        Some(HeroImage {
            dir,
            url: format!("/images/{}", file_name),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "streaming-tts-demo-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_image_is_none() {
        let root = scratch_dir("missing");
        assert!(find_hero_image(&[root], "images/hero.png").is_none());
    }

    #[test]
    fn finds_image_in_later_root() {
        let empty = scratch_dir("empty-root");
        let root = scratch_dir("image-root");
        std::fs::create_dir_all(root.join("images")).unwrap();
        std::fs::write(root.join("images/hero.png"), b"\x89PNG").unwrap();

        let hero = find_hero_image(&[empty, root.clone()], "images/hero.png").unwrap();
        assert_eq!(hero.dir, root.join("images"));
        assert_eq!(hero.url, "/images/hero.png");
    }

    #[test]
    fn directory_with_image_name_is_ignored() {
        let root = scratch_dir("dir-not-file");
        std::fs::create_dir_all(root.join("images/hero.png")).unwrap();
        assert!(find_hero_image(&[root], "images/hero.png").is_none());
    }
}
