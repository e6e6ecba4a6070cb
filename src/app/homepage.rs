use leptos::{either::*, prelude::*};
use leptos_meta::Title;

use super::action_button::ActionButton;
use super::icons::{Icon, LineIcon};
use super::image_element::ImageElement;
use crate::profile::{compact_count, profile, Profile};

#[component]
pub fn ProfilePage() -> impl IntoView {
    match profile() {
        Ok(p) => Either::Left(view! {
            <Title text=p.headline() />
            <div class="w-full h-full">
                <HeroBand avatar=p.avatar.clone() avatar_alt=p.avatar_alt.clone() />
                <BioCard profile=p />
            </div>
        }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <Title text="Profile" />
                <p class="p-4 text-red-500">{e.to_string()}</p>
            })
        }
    }
}

#[component]
fn HeroBand(avatar: String, avatar_alt: String) -> impl IntoView {
    view! {
        <div class="bg-[#EBF4FF] relative w-full border-b border-black px-4 py-8 flex flex-col justify-center items-center">
            <div class="flex gap-2 justify-center items-center">
                <p class="font-medium text-[12px]">"Your web alchemist"</p>
                <Sprite src="/hero/eye.png" alt="eye" class="w-6" />
            </div>
            <div class="flex gap-1 justify-center items-center">
                <div class="flex gap-1 justify-center items-center">
                    <p class="font-medium text-[12px]">"Performance"</p>
                    <Sprite src="/hero/daisy.png" alt="daisy" class="w-8" />
                </div>
                <p class="font-medium text-[12px]">"and a Bit of"</p>
            </div>
            <div class="flex justify-center mt-1 items-center gap-1">
                <div class="flex justify-center items-center gap-1">
                    <Sprite src="/hero/orange-flower.png" alt="flower orange" class="w-8" />
                    <p class="font-medium text-[12px]">"Frontend"</p>
                </div>
                <div class="bg-gray-700 ml-1 z-10 py-[1px] px-4 rounded-full transform -rotate-3 relative">
                    <p class="font-medium text-[12px]">"Sorcery"</p>
                    <div class="bg-[#E1CBF9] absolute -top-[13%] -left-[2.3%] z-0 py-[1px] px-4 rounded-full -rotate-1">
                        <p class="font-medium text-[12px]">"Sorcery"</p>
                    </div>
                </div>
            </div>
            <div class="flex justify-center mt-4 items-center gap-1">
                <ActionButton label="Click Me!" />
            </div>

            <Sprite src="/hero/phone.png" alt="phone" class="w-6 absolute z-50 top-[14%] left-[14%]" />
            <Sprite src="/hero/star-pink.png" alt="star" class="w-4 absolute bottom-[10%] left-[4%]" />
            <Sprite
                src="/hero/sparkle-pink.png"
                alt="sparkle"
                class="w-4 absolute top-[13%] right-[10%]"
            />
            <Sprite src="/hero/finger.png" alt="finger" class="w-6 absolute top-[43%] right-[4%]" />
            <Sprite
                src="/hero/purple-flower.png"
                alt="flower purple"
                class="w-4 absolute bottom-[7%] right-[24%]"
            />

            <div class="w-24 h-24 rounded-full absolute -bottom-[20%] left-[4%] bg-[#FDE3F9] border border-black">
                <ImageElement
                    src=avatar
                    alt=avatar_alt
                    width=300
                    height=300
                    priority=true
                    class="w-full"
                />
            </div>
        </div>
    }
}

/// Decorative artwork; all sprites share the same 300x300 source size.
#[component]
fn Sprite(src: &'static str, alt: &'static str, class: &'static str) -> impl IntoView {
    view! { <ImageElement src alt width=300 height=300 class /> }
}

#[component]
fn BioCard(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="border w-full bg-[#FFFDEE]">
            <div class="flex justify-end gap-1">
                {profile
                    .socials
                    .iter()
                    .map(|social| {
                        let icon = Icon::from(social.kind);
                        view! {
                            <ActionButton
                                icon=move || view! { <LineIcon icon /> }
                                background="bg-white"
                                hover_background="bg-gray-100"
                                href=social.url.clone()
                                padding="p-0 w-6 h-6"
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-col justify-start items-start p-4">
                <div class="flex justify-start items-center gap-1">
                    <p class="font-semibold text-[12px]">{profile.headline()}</p>
                    <LineIcon icon=Icon::BadgeCheck size=16 color="#71AFF9" />
                </div>
                <div class="bg-[#D6C9E6] rounded-full py-[2px] px-2 mt-1">
                    <p class="text-[8px] text-gray-700 font-semibold">{profile.display_handle()}</p>
                </div>
                <p class="text-[10px] mt-3 mb-4">{profile.bio.clone()}</p>
                <div class="flex justify-start items-start gap-3">
                    <div class="flex justify-start items-center gap-1">
                        <LineIcon icon=Icon::MapPin size=10 color="#536471" />
                        <p class="text-[10px] font-regular">{profile.location.clone()}</p>
                    </div>
                    <div class="flex justify-start items-center gap-1">
                        <LineIcon icon=Icon::Calendar size=10 color="#536471" />
                        <p class="text-[10px] font-regular">{profile.joined_label()}</p>
                    </div>
                </div>
                <div class="flex justify-start items-start gap-4 mt-1">
                    <Stat value=profile.following label="Following" />
                    <Stat value=profile.followers label="Followers" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Stat(value: u32, label: &'static str) -> impl IntoView {
    view! {
        <p class="text-[10px] font-regular">
            <span class="text-[10px] font-semibold">{compact_count(value)}</span>
            " "
            {label}
        </p>
    }
}
