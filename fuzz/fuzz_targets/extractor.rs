#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use url::Url;

use referent::extractor::parse_page;
use referent::fetcher::pipeline::process_response;

fuzz_target!(|data: &[u8]| {
    // Raw bytes go through charset sniffing and decoding like a real download.
    let page = process_response(
        Url::parse("https://example.com/article").unwrap(),
        Bytes::copy_from_slice(data),
        "text/html",
    );

    if let Ok(article) = parse_page(&page)
        && let Some(content) = article.content
    {
        assert!(!content.trim().is_empty());
    }
});
