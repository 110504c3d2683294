use crate::components::{Challenges, Header};
use yew::prelude::*;

#[function_component(ChallengesScreen)]
pub fn challenges_screen() -> Html {
    html! {
        <>
            <Header />
            <main>
                <Challenges />
            </main>
        </>
    }
}
