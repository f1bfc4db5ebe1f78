use super::html::escape;

pub const BRAND: &str = "IMR Movie Database";

fn navbar() -> String {
    format!(
        r#"<nav class="navbar">
  <div class="navbar-inner">
    <h1 class="brand">{}</h1>
    <div class="nav-links">
      <a href="/">Home</a>
    </div>
  </div>
</nav>"#,
        BRAND
    )
}

fn footer() -> &'static str {
    r#"<footer class="site-footer">
  <p>Movie Database - Powered by axum and SQLite</p>
</footer>"#
}

/// Wrap page content in the document shell: navbar, main, footer.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
{}
<main>
{}
</main>
{}
</body>
</html>
"#,
        escape(title),
        navbar(),
        content,
        footer()
    )
}
