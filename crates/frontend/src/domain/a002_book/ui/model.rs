use contracts::domain::a002_book::aggregate::{Book, BookDto};

/// Raw book form contents. Numeric fields stay text until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publisher: String,
    pub published_at: String,
    pub total_page: String,
    pub progress_page: String,
    pub price: String,
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            publisher: book.publisher.clone(),
            published_at: book.published_at.to_string(),
            total_page: book.total_page.to_string(),
            progress_page: book
                .progress_page
                .map(|p| p.to_string())
                .unwrap_or_default(),
            price: book.price.to_string(),
        }
    }
}

/// Year from `2019`, `2019-05` or `2019-05-01`.
pub fn parse_year(input: &str) -> Result<i64, String> {
    let head = input.trim().split(['-', '/']).next().unwrap_or_default();
    match head.parse::<i64>() {
        Ok(year) if (1..=9999).contains(&year) => Ok(year),
        _ => Err("出版年を正しく入力してください".to_string()),
    }
}

pub fn parse_count(input: &str, label: &str) -> Result<i64, String> {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(format!("{}は0以上の整数で入力してください", label)),
    }
}

impl BookForm {
    /// Registration body. Progress is not part of registration.
    pub fn to_create_dto(&self) -> Result<BookDto, String> {
        self.to_dto(None)
    }

    /// Update body. A blank progress field leaves progress unset.
    pub fn to_update_dto(&self) -> Result<BookDto, String> {
        let progress = match self.progress_page.trim() {
            "" => None,
            p => Some(parse_count(p, "現状ページ")?),
        };
        self.to_dto(progress)
    }

    fn to_dto(&self, progress_page: Option<i64>) -> Result<BookDto, String> {
        if self.title.trim().is_empty() {
            return Err("タイトルを入力してください".to_string());
        }
        Ok(BookDto {
            title: self.title.trim().to_string(),
            genre: self.genre.trim().to_string(),
            total_page: parse_count(&self.total_page, "総ページ数")?,
            progress_page,
            author: self.author.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            published_at: parse_year(&self.published_at)?,
            price: parse_count(&self.price, "金額")?,
        })
    }
}
