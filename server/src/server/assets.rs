//! Minimal upload form served at the root.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Stock QR Labels</title>
  <style>
    body { font-family: sans-serif; max-width: 36rem; margin: 3rem auto; }
    fieldset { margin: 1rem 0; border: 1px solid #ccc; }
    label { display: block; margin: 0.5rem 0; }
  </style>
</head>
<body>
  <h1>Stock QR Labels</h1>
  <p>Upload a CSV with <code>code</code> and <code>product</code> columns to
     generate a printable PDF of QR labels.
     <a href="/api/labels/template">Download the empty template</a>.</p>
  <form action="/api/labels/generate" method="post" enctype="multipart/form-data">
    <fieldset>
      <label>Sheet: <input type="file" name="sheet" accept=".csv" required></label>
      <label>Labels per row:
        <select name="columns">
          <option>2</option>
          <option selected>3</option>
          <option>4</option>
        </select>
      </label>
      <label>Font size:
        <input type="number" name="font_size" min="10" max="20" value="12">
      </label>
    </fieldset>
    <button type="submit">Generate PDF</button>
  </form>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
