#![allow(dead_code)]

use image::{Rgb, RgbImage};
use pdf_spread::*;
use std::path::{Path, PathBuf};

/// Backend that "renders" a text file listing page sizes.
///
/// A fake document is a file whose content is a list of `WxH` entries
/// separated by whitespace. An entry of `!` is a page that fails to render;
/// content starting with `broken` fails to open.
pub struct FakeBackend;

pub struct FakeDocument {
    pages: Vec<Option<(u32, u32)>>,
}

impl RasterBackend for FakeBackend {
    type Document<'a> = FakeDocument;

    fn open_document(&self, path: &Path) -> Result<FakeDocument> {
        let text = std::fs::read_to_string(path)?;
        if text.starts_with("broken") {
            return Err(SpreadError::Decode(format!("{}: not a PDF", path.display())));
        }

        let pages = text
            .split_whitespace()
            .map(|entry| {
                entry.split_once('x').map(|(w, h)| {
                    (w.parse().expect("width"), h.parse().expect("height"))
                })
            })
            .collect();
        Ok(FakeDocument { pages })
    }
}

impl RasterDocument for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn render_page(&self, index: usize) -> Result<RgbImage> {
        let (width, height) = self.pages[index]
            .ok_or_else(|| SpreadError::Decode(format!("page {} is damaged", index + 1)))?;
        Ok(RgbImage::from_pixel(width, height, page_color(index)))
    }
}

pub fn page_color(index: usize) -> Rgb<u8> {
    let shade = (index * 40 % 200) as u8 + 20;
    Rgb([shade, 255 - shade, 128])
}

/// Write a fake document with `pages` pages of the given size
pub fn write_fake_pdf(path: &Path, pages: &[(u32, u32)]) {
    let content: Vec<String> = pages.iter().map(|(w, h)| format!("{w}x{h}")).collect();
    std::fs::write(path, content.join(" ")).unwrap();
}

/// Write `count` page JPEGs named like rasterized pages; page `i` (0-based)
/// is `10 + i` pixels wide and `20 + 3 * i` pixels tall.
pub fn write_pages(dir: &Path, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let path = dir.join(page_file_name(i));
            let image = RgbImage::from_pixel(10 + i as u32, 20 + 3 * i as u32, page_color(i));
            save_jpeg(&image, &path).unwrap();
            path
        })
        .collect()
}

pub fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

/// Sorted file names inside `dir` (files only)
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().unwrap().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
