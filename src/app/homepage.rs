use leptos::{
    ev::{KeyboardEvent, MouseEvent},
    prelude::*,
};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{
    contact::ContactSection,
    dom,
    effects::{GreetingText, TypingText},
    resume::ResumeDownload,
    reveal::{Reveal, RevealBatch, StaggeredHover},
};
use crate::content::{
    Education, Experience, Project, SkillGroup, ABOUT, EDUCATION, EXPERIENCE, HERO_DESCRIPTION,
    HERO_SUBTITLE, OWNER, PROJECTS, SKILLS,
};
use crate::effects::{is_activation_key, KEY_LIFT_DURATION};
use crate::reveal::{HoverStagger, RevealGroup};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <ExperienceTimeline />
        <EducationList />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let jump = |target: &'static str, what: &'static str| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            log::info!("hero {what} clicked");
            dom::scroll_to_section(target);
        }
    };

    view! {
        <section id="home" class="section hero">
            <h1 class="hero__title">"Hi, I'm " <span class="hero__name">{OWNER}</span></h1>
            <TypingText text=HERO_SUBTITLE class="hero__subtitle" />
            <GreetingText text=HERO_DESCRIPTION class="hero__description" />
            <div class="hero__buttons flex gap-4">
                <a href="#projects" class="hero__cta btn btn--primary" on:click=jump("#projects", "cta")>
                    "View My Work"
                </a>
                <a href="#contact" class="hero__contact btn btn--outline" on:click=jump("#contact", "contact")>
                    "Get In Touch"
                </a>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="section__title">"About Me"</h2>
            <div class="about__content space-y-4">
                {ABOUT.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
            </div>
            <ResumeDownload />
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section skills">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills__grid grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                {SKILLS.iter().map(|group| view! { <SkillCard group=*group /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> impl IntoView {
    let hover = StaggeredHover::new(HoverStagger::SKILL_ITEMS, group.items.len());

    view! {
        <Reveal group=RevealGroup::CARDS class="skill-card">
            <div tabindex="0" on:mouseenter=move |_| hover.enter() on:mouseleave=move |_| hover.leave()>
                <h3 class="skill-card__title">{group.icon} " " {group.title}</h3>
                <ul class="skill-card__list">
                    {group
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <li class="skill-card__item" style:transform=move || hover.transform(i)>
                                    {*item}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section projects">
            <h2 class="section__title">"Projects"</h2>
            <div class="projects__grid grid gap-6 md:grid-cols-2">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=*project /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let hover = StaggeredHover::new(HoverStagger::TECH_TAGS, project.tech.len());
    let (lifted, set_lifted) = signal(false);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| set_lifted(false),
        KEY_LIFT_DURATION.as_millis() as f64,
    );

    let on_keydown = move |ev: KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            set_lifted(true);
            start(());
        }
    };

    view! {
        <Reveal group=RevealGroup::CARDS class="project-card">
            <article
                class="project-card__body"
                tabindex="0"
                style:transform=move || if lifted() { "translateY(-8px)" } else { "" }
                on:mouseenter=move |_| hover.enter()
                on:mouseleave=move |_| hover.leave()
                on:keydown=on_keydown
            >
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__tech flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .enumerate()
                        .map(|(i, tag)| {
                            view! {
                                <span
                                    class="tech-tag"
                                    style:transform=move || hover.transform(i)
                                    style:box-shadow=move || hover.shadow(i)
                                >
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                {project
                    .link
                    .map(|href| {
                        view! {
                            <a href=href class="project-card__link" target="_blank" rel="noopener noreferrer">
                                "View source →"
                            </a>
                        }
                    })}
            </article>
        </Reveal>
    }
}

#[component]
fn ExperienceTimeline() -> impl IntoView {
    provide_context(RevealBatch::new());

    view! {
        <section id="experience" class="section experience">
            <h2 class="section__title">"Experience"</h2>
            <div class="experience__timeline">
                {EXPERIENCE.iter().map(|job| view! { <ExperienceItem job=*job /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ExperienceItem(job: Experience) -> impl IntoView {
    view! {
        <Reveal group=RevealGroup::TIMELINE class="experience__item">
            <div class="experience__header">
                <h3 class="experience__role">{job.role}</h3>
                <span class="experience__period">{job.period}</span>
            </div>
            <p class="experience__company">{job.company}</p>
            <ul class="experience__highlights list-disc pl-5">
                {job.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
            </ul>
        </Reveal>
    }
}

#[component]
fn EducationList() -> impl IntoView {
    view! {
        <section id="education" class="section education">
            <h2 class="section__title">"Education"</h2>
            <div class="education__list grid gap-6 md:grid-cols-2">
                {EDUCATION
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <EducationItem entry=*entry index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn EducationItem(entry: Education, index: usize) -> impl IntoView {
    view! {
        <Reveal group=RevealGroup::EDUCATION index class="education__item">
            <h3 class="education__degree">{entry.degree}</h3>
            <p class="education__school">{entry.school} " · " {entry.period}</p>
            <p class="education__detail">{entry.detail}</p>
        </Reveal>
    }
}
