use crate::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AuthProvider>
                    <AppRoutes />
                </AuthProvider>
            </ToasterProvider>
        </ConfigProvider>
    }
}
