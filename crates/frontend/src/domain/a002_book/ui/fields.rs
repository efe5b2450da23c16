use leptos::prelude::*;
use thaw::*;

use super::model::BookForm;

/// One signal per book form input
#[derive(Clone, Copy)]
pub struct BookFields {
    pub title: RwSignal<String>,
    pub author: RwSignal<String>,
    pub genre: RwSignal<String>,
    pub publisher: RwSignal<String>,
    pub published_at: RwSignal<String>,
    pub total_page: RwSignal<String>,
    pub progress_page: RwSignal<String>,
    pub price: RwSignal<String>,
}

impl BookFields {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            author: RwSignal::new(String::new()),
            genre: RwSignal::new(String::new()),
            publisher: RwSignal::new(String::new()),
            published_at: RwSignal::new(String::new()),
            total_page: RwSignal::new(String::new()),
            progress_page: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
        }
    }

    pub fn fill(&self, form: BookForm) {
        self.title.set(form.title);
        self.author.set(form.author);
        self.genre.set(form.genre);
        self.publisher.set(form.publisher);
        self.published_at.set(form.published_at);
        self.total_page.set(form.total_page);
        self.progress_page.set(form.progress_page);
        self.price.set(form.price);
    }

    pub fn reset(&self) {
        self.fill(BookForm::default());
    }

    pub fn snapshot(&self) -> BookForm {
        BookForm {
            title: self.title.get_untracked(),
            author: self.author.get_untracked(),
            genre: self.genre.get_untracked(),
            publisher: self.publisher.get_untracked(),
            published_at: self.published_at.get_untracked(),
            total_page: self.total_page.get_untracked(),
            progress_page: self.progress_page.get_untracked(),
            price: self.price.get_untracked(),
        }
    }
}

impl Default for BookFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn BookFieldInputs(
    fields: BookFields,
    #[prop(optional)] with_progress: bool,
) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <label>"タイトル"</label>
            <Input value=fields.title />
            <label>"著者"</label>
            <Input value=fields.author />
            <label>"ジャンル"</label>
            <Input value=fields.genre />
            <label>"出版社"</label>
            <Input value=fields.publisher />
            <label>"出版年"</label>
            <Input value=fields.published_at placeholder="2024" />
            <label>"総ページ数"</label>
            <Input value=fields.total_page input_type=InputType::Number />
            <Show when=move || with_progress>
                <label>"現状ページ"</label>
                <Input value=fields.progress_page input_type=InputType::Number />
            </Show>
            <label>"金額"</label>
            <Input value=fields.price input_type=InputType::Number />
        </Flex>
    }
}
