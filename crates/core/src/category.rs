//! Extension-based file classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Classification tag derived from a file's extension. `Others` is the
/// fallback for unknown extensions and extensionless files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Images,
    Documents,
    Spreadsheets,
    Presentations,
    Videos,
    Audio,
    Archives,
    Executables,
    Code,
    Fonts,
    Others,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Images,
        Category::Documents,
        Category::Spreadsheets,
        Category::Presentations,
        Category::Videos,
        Category::Audio,
        Category::Archives,
        Category::Executables,
        Category::Code,
        Category::Fonts,
        Category::Others,
    ];

    /// Folder name for this category under the watched root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Documents => "documents",
            Category::Spreadsheets => "spreadsheets",
            Category::Presentations => "presentations",
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Archives => "archives",
            Category::Executables => "executables",
            Category::Code => "code",
            Category::Fonts => "fonts",
            Category::Others => "others",
        }
    }

    pub fn from_folder_name(name: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    /// Classifies by the final dotted suffix, case-insensitively. Total: any
    /// unrecognized or missing extension maps to `Others`.
    pub fn resolve(path: &Path) -> Category {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => e.to_lowercase(),
            None => return Category::Others,
        };
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" | "webp" | "tiff" => Category::Images,
            "pdf" | "doc" | "docx" | "txt" | "rtf" | "odt" | "pages" => Category::Documents,
            "xls" | "xlsx" | "csv" | "ods" | "numbers" => Category::Spreadsheets,
            "ppt" | "pptx" | "odp" | "key" => Category::Presentations,
            "mp4" | "avi" | "mkv" | "mov" | "wmv" | "flv" | "webm" | "m4v" => Category::Videos,
            "mp3" | "wav" | "flac" | "aac" | "ogg" | "wma" | "m4a" => Category::Audio,
            "zip" | "rar" | "7z" | "tar" | "gz" | "bz2" | "xz" => Category::Archives,
            "exe" | "msi" | "dmg" | "pkg" | "deb" | "rpm" | "appimage" => Category::Executables,
            "py" | "js" | "html" | "css" | "java" | "cpp" | "c" | "php" | "rb" | "go" => {
                Category::Code
            }
            "ttf" | "otf" | "woff" | "woff2" | "eot" => Category::Fonts,
            _ => Category::Others,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
