use std::rc::Rc;

use spares_common::attachment::{ObjectUrl, UrlRevoker};

/// Revokes through `URL.revokeObjectURL`.
pub struct BrowserRevoker;

impl UrlRevoker for BrowserRevoker {
    fn revoke(&self, url: &str) {
        #[cfg(target_family = "wasm")]
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            tracing::warn!("revokeObjectURL failed for {url}: {e:?}");
        }
        #[cfg(not(target_family = "wasm"))]
        let _ = url;
    }
}

/// Wrap file contents in a Blob and lease a local URL for it.
#[cfg(target_family = "wasm")]
pub fn lease_object_url(bytes: &[u8], mime: &str) -> Result<ObjectUrl, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Blob creation failed: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("createObjectURL failed: {:?}", e))?;
    Ok(ObjectUrl::new(url, Rc::new(BrowserRevoker)))
}

// Non-WASM stand-in so desktop builds type-check; hands out inert URLs.
#[cfg(not(target_family = "wasm"))]
pub fn lease_object_url(bytes: &[u8], mime: &str) -> Result<ObjectUrl, String> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT: AtomicU64 = AtomicU64::new(1);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    let _ = (bytes, mime);
    Ok(ObjectUrl::new(format!("blob:local/{n}"), Rc::new(BrowserRevoker)))
}
