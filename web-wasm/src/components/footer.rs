use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Data is read directly from the book program accounts."</p>
        </footer>
    }
}
