//! Viewer key token integration tests

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use custif_pdf::{
    build_viewer_url, decode_key, decode_key_pairs, encode_key, PdfViewerOptions, ScrollMode,
    SelectionTool, SpreadMode, ThemeMode, ToolbarPosition, Zoom, DEFAULT_VIEWER_PATH,
};
use proptest::prelude::*;
use rstest::rstest;

// === Wire format ===

#[test]
fn test_default_viewer_url() {
    let options = PdfViewerOptions {
        toolbar: true,
        zoom: Zoom::Auto,
        ..Default::default()
    };
    let url = build_viewer_url("/viewer.html", "https://x.com/f.pdf", &options).to_url();

    let prefix = "/viewer.html?file=https%3A%2F%2Fx.com%2Ff.pdf&key=";
    assert!(url.starts_with(prefix));

    let escaped_token = &url[prefix.len()..];
    let token = urlencoding::decode(escaped_token).unwrap();
    let decoded = String::from_utf8(STANDARD.decode(token.as_bytes()).unwrap()).unwrap();
    assert_eq!(
        decoded,
        "themeMode=default&toolbar=true&position=top&presentation=true&lazyLoad=false\
         &download=true&copy_text=true&add_text=true&draw=true&pdf_rotation=true\
         &pdf_image=true&pdf_details=true&selection_tool=0&scrolling=0&spreads=-1&pdf_zoom=auto"
    );
}

#[test]
fn test_key_order_is_fixed() {
    let options = PdfViewerOptions {
        theme: ThemeMode::Custom {
            color: "#112233".to_string(),
        },
        ..Default::default()
    };
    let keys: Vec<String> = decode_key_pairs(&encode_key(&options))
        .unwrap()
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(
        keys,
        vec![
            "themeMode",
            "toolbar",
            "position",
            "presentation",
            "lazyLoad",
            "download",
            "copy_text",
            "add_text",
            "draw",
            "pdf_rotation",
            "pdf_image",
            "pdf_details",
            "selection_tool",
            "scrolling",
            "spreads",
            "pdf_zoom",
            "customColor",
        ]
    );
}

#[rstest]
#[case(Zoom::Auto, "auto")]
#[case(Zoom::PageActual, "page-actual")]
#[case(Zoom::PageFit, "page-fit")]
#[case(Zoom::PageWidth, "page-width")]
#[case(Zoom::percent(125.0).unwrap(), "125")]
#[case(Zoom::percent(0.5).unwrap(), "0.5")]
#[case(Zoom::Blank, "")]
fn test_zoom_on_the_wire(#[case] zoom: Zoom, #[case] expected: &str) {
    let options = PdfViewerOptions {
        zoom,
        ..Default::default()
    };
    let pairs = decode_key_pairs(&encode_key(&options)).unwrap();
    let (_, value) = pairs.iter().find(|(k, _)| k == "pdf_zoom").unwrap();
    assert_eq!(value, expected);
}

#[rstest]
#[case("0")]
#[case("-25")]
#[case("NaN")]
#[case("inf")]
fn test_zoom_out_of_range_is_rejected(#[case] raw: &str) {
    let token = STANDARD.encode(format!("pdf_zoom={}", raw));
    assert!(decode_key(&token).is_err());
    assert!(Zoom::from_param(raw).is_err());
}

#[test]
fn test_booleans_are_literal_words() {
    let options = PdfViewerOptions {
        download: false,
        lazy_load: true,
        ..Default::default()
    };
    let pairs = decode_key_pairs(&encode_key(&options)).unwrap();
    for (key, value) in &pairs {
        if key == "download" {
            assert_eq!(value, "false");
        }
        if key == "lazyLoad" {
            assert_eq!(value, "true");
        }
    }
    assert!(pairs.iter().all(|(_, v)| v != "1" && v != "yes"));
}

#[test]
fn test_viewer_path_constant() {
    let url = build_viewer_url(DEFAULT_VIEWER_PATH, "a.pdf", &PdfViewerOptions::default());
    assert!(url.to_url().starts_with("assets/pdfjs/web/viewer.html?file=a.pdf&key="));
}

// === Property-Based Tests ===

fn theme_strategy() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![
        Just(ThemeMode::Default),
        Just(ThemeMode::Dark),
        Just(ThemeMode::Light),
        "(#[0-9a-f]{6})?".prop_map(|color| ThemeMode::Custom { color }),
    ]
}

fn zoom_strategy() -> impl Strategy<Value = Zoom> {
    prop_oneof![
        Just(Zoom::Auto),
        Just(Zoom::PageActual),
        Just(Zoom::PageFit),
        Just(Zoom::PageWidth),
        Just(Zoom::Blank),
        (1e-6f64..1e6).prop_filter_map("positive", Zoom::percent),
    ]
}

prop_compose! {
    fn options_strategy()(
        theme in theme_strategy(),
        flags in proptest::collection::vec(any::<bool>(), 10),
        bottom in any::<bool>(),
        hand in any::<bool>(),
        scrolling in prop_oneof![
            Just(ScrollMode::Page),
            Just(ScrollMode::Vertical),
            Just(ScrollMode::Horizontal),
            Just(ScrollMode::Wrapped),
        ],
        spreads in prop_oneof![
            Just(SpreadMode::Unknown),
            Just(SpreadMode::NoSpreads),
            Just(SpreadMode::Odd),
            Just(SpreadMode::Even),
        ],
        zoom in zoom_strategy(),
    ) -> PdfViewerOptions {
        PdfViewerOptions {
            theme,
            toolbar: flags[0],
            position: if bottom { ToolbarPosition::Bottom } else { ToolbarPosition::Top },
            presentation: flags[1],
            lazy_load: flags[2],
            download: flags[3],
            copy_text: flags[4],
            add_text: flags[5],
            draw: flags[6],
            rotation: flags[7],
            image: flags[8],
            details: flags[9],
            selection_tool: if hand { SelectionTool::Hand } else { SelectionTool::Text },
            scrolling,
            spreads,
            zoom,
        }
    }
}

proptest! {
    #[test]
    fn test_decode_then_encode_is_identity(options in options_strategy()) {
        let token = encode_key(&options);
        let decoded = decode_key(&token).unwrap();
        prop_assert_eq!(encode_key(&decoded), token);
        prop_assert_eq!(decoded, options);
    }

    #[test]
    fn test_distinct_options_give_distinct_tokens(a in options_strategy(), b in options_strategy()) {
        prop_assume!(a != b);
        prop_assert_ne!(encode_key(&a), encode_key(&b));
    }

    #[test]
    fn test_file_location_survives(path in "[a-zA-Z0-9 _./-]{1,40}") {
        let location = format!("https://example.com/{}", path);
        let url = build_viewer_url("v.html", &location, &PdfViewerOptions::default());
        prop_assert_eq!(url.file_location(), location);
    }
}
