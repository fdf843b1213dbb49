//! `ossb decode <url>...` – percent-decode copied URLs.

use ossb_core::url_model::percent_decode;

pub fn run_decode(urls: &[String]) {
    for url in urls {
        println!("{}", percent_decode(url));
    }
}
