//! File-picker glue.
//!
//! Picked files are wrapped in [`BrowserFile`] so the workflow can treat them
//! as plain handles. Contents are never read.

use aiqc::FileHandle;
use leptos::{html, NodeRef};
use web_sys::{File, HtmlInputElement};

/// Name and size of a picked `web_sys::File`.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    name: String,
    size: u64,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
        }
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// Every file currently selected in `input`, in picker order.
pub fn picked_files(input: &HtmlInputElement) -> Vec<BrowserFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile::new)
        .collect()
}

/// Open the native picker behind `input`.
pub fn open_picker(input: NodeRef<html::Input>) {
    match input.get_untracked() {
        Some(el) => el.click(),
        None => log::warn!("file picker not mounted"),
    }
}

/// Clear the picker so the same file name fires `change` again.
pub fn reset_picker(input: NodeRef<html::Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}
