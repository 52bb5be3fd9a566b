//! Export artifact shapes: named-file bundles ready for packaging.
//!
//! Archive packaging itself lives outside the core; a bundle is the ordered
//! set of file names and byte contents an archiver would consume.

use serde::{Deserialize, Serialize};

/// One exported file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFile {
    pub name: String,
    pub contents: String,
}

/// A zip-equivalent bundle of exported files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub files: Vec<ExportFile>,
}

impl ExportBundle {
    /// Static-site bundle: `index.html` + `styles.css`.
    pub fn static_site(html: String, css: String) -> Self {
        Self {
            files: vec![
                ExportFile {
                    name: "index.html".to_string(),
                    contents: html,
                },
                ExportFile {
                    name: "styles.css".to_string(),
                    contents: css,
                },
            ],
        }
    }

    /// Component bundle: `page.component.html` / `.scss` / `.ts`.
    pub fn component(html: String, scss: String) -> Self {
        Self {
            files: vec![
                ExportFile {
                    name: "page.component.html".to_string(),
                    contents: html,
                },
                ExportFile {
                    name: "page.component.scss".to_string(),
                    contents: scss,
                },
                ExportFile {
                    name: "page.component.ts".to_string(),
                    contents: component_scaffold().to_string(),
                },
            ],
        }
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| file.contents.as_str())
    }
}

/// Component class scaffold emitted with the component-export variant.
pub fn component_scaffold() -> &'static str {
    "import { Component } from '@angular/core';\n\n@Component({\n  selector: 'app-page',\n  standalone: true,\n  templateUrl: './page.component.html',\n  styleUrl: './page.component.scss',\n})\nexport class PageComponent {}\n"
}
