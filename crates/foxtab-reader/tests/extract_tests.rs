use foxtab_reader::extract_article;

const ARTICLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Fallback Title - Some Site</title>
  <meta property="og:title" content="An Interesting Article">
</head>
<body>
  <nav><p>Home</p><p>About</p></nav>
  <article>
    <h1>An Interesting Article</h1>
    <p>This opening paragraph carries enough text to count as real article
    content rather than navigation chrome, and it keeps going for a while
    so the density heuristic picks the article element over the nav.</p>
    <h2>A Section</h2>
    <p>The second paragraph also has a reasonable amount of body text in it,
    because short fragments under twenty characters are dropped as noise.</p>
    <ul><li>First point worth keeping around</li></ul>
    <blockquote>Somebody said something quotable here once.</blockquote>
    <pre>let x = 1;</pre>
  </article>
  <footer><p>(c)</p></footer>
</body>
</html>"#;

#[test]
fn test_title_prefers_og_title() {
    let (title, _) = extract_article(ARTICLE_PAGE);
    assert_eq!(title.as_deref(), Some("An Interesting Article"));
}

#[test]
fn test_title_falls_back_to_title_tag() {
    let html = "<html><head><title>  Plain   Title </title></head>\
                <body><p>text</p></body></html>";
    let (title, _) = extract_article(html);
    assert_eq!(title.as_deref(), Some("Plain Title"));
}

#[test]
fn test_title_none_when_absent() {
    let html = "<html><body><p>no title anywhere in this one</p></body></html>";
    let (title, _) = extract_article(html);
    assert!(title.is_none());
}

#[test]
fn test_body_extracts_article_blocks() {
    let (_, body) = extract_article(ARTICLE_PAGE);

    assert!(body.contains("This opening paragraph"));
    assert!(body.contains("## A Section"));
    assert!(body.contains("- First point worth keeping around"));
    assert!(body.contains("> Somebody said something quotable"));
    assert!(body.contains("let x = 1;"));
    // Navigation chrome outside <article> never makes it in.
    assert!(!body.contains("Home"));
    assert!(!body.contains("About"));
}

#[test]
fn test_body_drops_short_paragraph_noise() {
    let (_, body) = extract_article(ARTICLE_PAGE);
    assert!(!body.contains("(c)"));
}

#[test]
fn test_body_falls_back_to_whole_body() {
    // No <article> or <main>, so the body element is the content root.
    let html = "<html><body>\
                <p>A paragraph that is long enough to be kept as content.</p>\
                </body></html>";
    let (_, body) = extract_article(html);
    assert!(body.contains("A paragraph that is long enough"));
}

#[test]
fn test_body_empty_for_contentless_page() {
    let (_, body) = extract_article("<html><body><div>hi</div></body></html>");
    assert!(body.trim().is_empty());
}

#[test]
fn test_whitespace_is_normalized() {
    let html = "<html><body><article>\
                <p>Spread    across\n\n lines   but still one normal paragraph of text.</p>\
                <p>Padding paragraph so the article clears the density threshold used for\
                semantic containers, with plenty of additional filler text to spare. More\
                filler text keeps coming until the four hundred character minimum for the\
                article selector is comfortably met by these sentences.</p>\
                </article></body></html>";
    let (_, body) = extract_article(html);
    assert!(body.contains("Spread across lines but still one normal paragraph of text."));
}
