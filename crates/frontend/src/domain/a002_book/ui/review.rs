use leptos::prelude::*;
use thaw::*;

/// Reading progress as a 0..=1 fraction for the gauge. Missing means 0.
pub fn progress_ratio(percentage: Option<i64>) -> f64 {
    percentage.unwrap_or(0).clamp(0, 100) as f64 / 100.0
}

/// Per-row review dialog with a progress gauge.
#[component]
pub fn BookReviewButton(progress_percentage: Option<i64>) -> impl IntoView {
    let open = RwSignal::new(false);
    let ratio = progress_ratio(progress_percentage);
    let label = format!("{}%", progress_percentage.unwrap_or(0));

    view! {
        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(true)>
            "Review"
        </Button>
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"感想"</DialogTitle>
                    <DialogContent>
                        <Flex gap=FlexGap::Large align=FlexAlign::Center>
                            <span>"進捗率"</span>
                            <ProgressBar value=ratio />
                            <span>{label}</span>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            "Back"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
