use askama::Template;

/// Full page. Region contents are already rendered html.
#[derive(Template)]
#[template(path = "index.html")]
pub struct Index<'a> {
    pub list: &'a str,
    pub header: &'a str,
    pub detail: &'a str,
}

/// Detail response for htmx: content for the target plus the header swapped out of band.
#[derive(Template)]
#[template(path = "detail_fragment.html")]
pub struct DetailFragment<'a> {
    pub header: &'a str,
    pub content: &'a str,
}
