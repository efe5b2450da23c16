use leptos::prelude::*;
use thaw::*;

/// Asks before ending the session. Closing or cancelling leaves it untouched.
#[component]
pub fn LogoutConfirmDialog(open: RwSignal<bool>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"ログアウト確認"</DialogTitle>
                    <DialogContent>"本当にログアウトしますか？"</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "キャンセル"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            "OK"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
