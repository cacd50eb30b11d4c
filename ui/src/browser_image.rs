//! Files picked through `<input type="file">`.

use std::rc::Rc;

use payloads::form::{EncodingError, ImageFile};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

/// An object URL for showing a picked file before it is uploaded.
///
/// The URL is revoked when the last reference is dropped, which happens when
/// the selection is replaced, the form is reset or the page unmounts.
#[derive(Debug, PartialEq)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn new(file: &File) -> Option<Self> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(Self(url)),
            Err(e) => {
                tracing::warn!("Could not create preview for {}: {e:?}", file.name());
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            tracing::warn!("Could not revoke preview URL: {e:?}");
        }
    }
}

/// A picked file plus its preview.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserImage {
    file: File,
    preview: Option<Rc<PreviewUrl>>,
}

impl BrowserImage {
    pub fn new(file: File) -> Self {
        let preview = PreviewUrl::new(&file).map(Rc::new);
        Self { file, preview }
    }

    /// Collect every file of a file input, in the order the browser lists
    /// them.
    pub fn from_file_list(files: &web_sys::FileList) -> Vec<Self> {
        (0..files.length())
            .filter_map(|i| files.get(i))
            .map(Self::new)
            .collect()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_deref().map(PreviewUrl::as_str)
    }
}

impl ImageFile for BrowserImage {
    fn name(&self) -> String {
        self.file.name()
    }

    fn media_type(&self) -> String {
        self.file.type_()
    }

    async fn read(&self) -> Result<Vec<u8>, EncodingError> {
        let buffer = JsFuture::from(self.file.array_buffer())
            .await
            .map_err(|e| EncodingError {
                name: self.name(),
                reason: format!("{e:?}"),
            })?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}
