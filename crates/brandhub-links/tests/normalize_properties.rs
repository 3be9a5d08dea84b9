use brandhub_links::{deep_sanitize, normalize_url};
use proptest::prelude::*;
use serde_json::json;

fn share_link() -> impl Strategy<Value = String> {
    let token = "[A-Za-z0-9_-]{1,12}";
    (token, token, 0usize..6).prop_map(|(a, b, form)| match form {
        0 => format!("https://www.dropbox.com/s/{a}/{b}.png?dl=0"),
        1 => format!("https://dropbox.com/scl/fi/{a}/{b}.svg?rlkey={b}&dl=1"),
        2 => format!("www.dropbox.com/s/{a}/{b}.png?dl=0"),
        3 => format!("https://drive.google.com/file/d/{a}/view?usp=sharing"),
        4 => format!("https://1drv.ms/i/s!{a}"),
        _ => format!("https://app.box.com/s/{a}"),
    })
}

proptest! {
    #[test]
    fn prop_normalization_is_idempotent(link in share_link()) {
        let once = normalize_url(Some(&link));
        prop_assert_eq!(normalize_url(Some(&once)), once);
    }

    #[test]
    fn prop_dropbox_never_keeps_dl_flag(a in "[a-z0-9]{1,8}", flag in 0u8..2) {
        let out = normalize_url(Some(&format!("https://www.dropbox.com/s/{a}/f.png?dl={flag}")));
        prop_assert!(out.starts_with("https://dl.dropboxusercontent.com/"));
        prop_assert!(out.ends_with("raw=1"));
        prop_assert!(!out.contains("dl="));
    }

    #[test]
    fn prop_sanitize_is_idempotent(links in proptest::collection::vec(share_link(), 0..6)) {
        let tree = json!({ "assets": links.iter().map(|l| json!({ "url": l })).collect::<Vec<_>>() });
        let once = deep_sanitize(tree);
        prop_assert_eq!(deep_sanitize(once.clone()), once);
    }
}
