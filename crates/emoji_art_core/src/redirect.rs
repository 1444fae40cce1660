use url::Url;

const IMAGE_URL_KEY: &str = "imgurl";

/// Unwraps image-search and proxy links down to the image they point at.
///
/// The first `imgurl` query value that decodes to a valid URL wins. Without
/// one the link is returned as-is.
pub fn extract_redirected_image_url(url: &Url) -> Url {
    extract_redirected_image_url_with_base(url, None)
}

/// Like [`extract_redirected_image_url`], falling back to `base` when the
/// link was resolved against one.
pub fn extract_redirected_image_url_with_base(url: &Url, base: Option<&Url>) -> Url {
    let embedded = url
        .query_pairs()
        .filter(|(key, _)| key == IMAGE_URL_KEY)
        .find_map(|(_, value)| Url::parse(&value).ok());

    embedded
        .or_else(|| base.cloned())
        .unwrap_or_else(|| url.clone())
}
