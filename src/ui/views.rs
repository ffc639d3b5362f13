use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use super::{error_box, info_box, photos, success_box, warning_box, GREEN, TEAL};
use crate::data::model::Family;
use crate::session::quiz::{Feedback, Question, QuestionKind, Streak};
use crate::state::{AppState, Mode, Page};

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the selected page and mode in the central panel.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    if state.catalog.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open een plantenwerkboek  (Bestand → Openen…)");
        });
        return;
    }

    match state.page {
        Page::Families => scrolled(ui, |ui| families(ui, state)),
        Page::Driller => {
            if state.filtered.is_empty() {
                error_box(ui, "Geen planten gevonden met de geselecteerde filters.");
                return;
            }
            match state.mode {
                Mode::Practice => scrolled(ui, |ui| practice(ui, state)),
                // The table scrolls by itself.
                Mode::FullList => full_list(ui, state),
                Mode::MultipleChoice => scrolled(ui, |ui| multiple_choice(ui, state)),
                Mode::Expert => scrolled(ui, |ui| expert(ui, state)),
            }
        }
    }
}

fn scrolled(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, add_contents);
}

// ---------------------------------------------------------------------------
// Practice: one plant at a time
// ---------------------------------------------------------------------------

fn practice(ui: &mut Ui, state: &mut AppState) {
    ui.heading(Mode::Practice.label());
    state.sync_practice();

    let (Some(catalog), Some(idx)) = (&state.catalog, state.practice.current()) else {
        warning_box(ui, "Geen planten gevonden in het opgegeven bereik.");
        return;
    };
    let plant = &catalog.plants[idx];
    let (position, total) = state.practice.position();

    ui.label(format!("Plant {position} van {total}"));
    ui.add_space(6.0);
    ui.label(
        RichText::new(&plant.scientific_name)
            .italics()
            .size(28.0)
            .color(TEAL),
    )
    .on_hover_text(plant.name_parts());
    ui.label(RichText::new(&plant.dutch_name).size(22.0).color(GREEN));
    if let Some(info) = &plant.extra_info {
        ui.add_space(6.0);
        info_box(ui, info);
    }

    ui.add_space(6.0);
    let next = ui
        .with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui: &mut Ui| {
            ui.button("Volgende plant").clicked()
        })
        .inner;

    photos::show(ui, &state.config, plant);

    if next {
        state.practice.advance();
    }
}

// ---------------------------------------------------------------------------
// Full list: table of the active range
// ---------------------------------------------------------------------------

fn full_list(ui: &mut Ui, state: &AppState) {
    let Some(catalog) = &state.catalog else {
        return;
    };
    let rows = state.active_rows();

    ui.heading(Mode::FullList.label());
    ui.label(format!("Aantal planten in de lijst: {}", rows.len()));
    ui.add_space(6.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(40.0))
        .column(Column::initial(220.0).at_least(80.0))
        .column(Column::initial(280.0).at_least(80.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in ["Nummer", "Nederlands", "Wetenschappelijke naam", "Familie"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let plant = &catalog.plants[rows[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(plant.number.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&plant.dutch_name);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(RichText::new(&plant.scientific_name).italics());
                });
                row.col(|ui: &mut Ui| {
                    let family = plant.family.as_deref();
                    let color = state.family_colors.color_for(family);
                    ui.label(RichText::new(family.unwrap_or("")).color(color));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Quiz modes
// ---------------------------------------------------------------------------

fn quiz_header(ui: &mut Ui, title: &str, streak: Streak, total: usize) {
    ui.heading(title);
    ui.add(egui::ProgressBar::new(streak.progress(total)).fill(GREEN));
    ui.label(format!(
        "Reeks correcte antwoorden: {} / {total}",
        streak.count()
    ));
    ui.add_space(6.0);
}

fn question_heading(ui: &mut Ui, question: &Question) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label(RichText::new(question.kind.prompt()).size(20.0).strong());
        let subject = RichText::new(format!("'{}'?", question.subject))
            .size(20.0)
            .strong();
        // Scientific names are set in italics.
        match question.kind {
            QuestionKind::DutchName => ui.label(subject.italics()),
            QuestionKind::ScientificName => ui.label(subject),
        };
    });
    ui.add_space(6.0);
}

fn feedback(ui: &mut Ui, feedback: Option<&Feedback>) {
    match feedback {
        Some(Feedback::Correct) => success_box(ui, "🎉 Correct!"),
        Some(Feedback::Wrong { expected }) => {
            error_box(ui, &format!("❌ Fout! Het juiste antwoord was {expected}"))
        }
        None => {}
    }
}

fn multiple_choice(ui: &mut Ui, state: &mut AppState) {
    let mut rng = rand::rng();
    state.ensure_question(&mut rng);

    let total = state.active_rows().len();
    quiz_header(ui, Mode::MultipleChoice.label(), state.quiz.streak, total);

    let Some(question) = state.quiz.question.clone() else {
        warning_box(ui, "Geen planten gevonden in het opgegeven bereik.");
        return;
    };
    question_heading(ui, &question);

    ui.label("Selecteer de juiste optie:");
    let answered = state.quiz.answered();
    // 0 is the placeholder, option i sits at position i + 1.
    let mut picked = state.quiz.chosen.map_or(0, |i| i + 1);
    ui.add_enabled_ui(!answered, |ui: &mut Ui| {
        for (pos, option) in question.displayed_options().into_iter().enumerate() {
            ui.radio_value(&mut picked, pos, RichText::new(option).size(18.0));
            ui.add_space(4.0);
        }
    });
    if !answered && picked > 0 {
        state.quiz.choose_option(picked - 1);
    }

    feedback(ui, state.quiz.feedback.as_ref());

    let next = state.quiz.answered() && ui.button("Volgende plant").clicked();

    if let Some(catalog) = &state.catalog {
        photos::show(ui, &state.config, &catalog.plants[question.plant]);
    }

    if next {
        state.next_question(&mut rng);
    }
}

fn expert(ui: &mut Ui, state: &mut AppState) {
    let mut rng = rand::rng();
    state.ensure_question(&mut rng);

    let total = state.active_rows().len();
    quiz_header(ui, Mode::Expert.label(), state.quiz.streak, total);

    let Some(question) = state.quiz.question.clone() else {
        warning_box(ui, "Geen planten gevonden in het opgegeven bereik.");
        return;
    };
    question_heading(ui, &question);

    let response = ui
        .horizontal(|ui: &mut Ui| {
            ui.label("Typ uw antwoord en druk op Enter:");
            ui.add(egui::TextEdit::singleline(&mut state.quiz.input).desired_width(360.0))
        })
        .inner;
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    // Feedback belongs to the previous question.
    feedback(ui, state.quiz.feedback.as_ref());

    if let Some(catalog) = &state.catalog {
        photos::show(ui, &state.config, &catalog.plants[question.plant]);
    }

    if submitted {
        if let Some(result) = state.submit_free_text(&mut rng) {
            log::debug!("free-text answer: {result:?}");
        }
        response.request_focus();
    }
}

// ---------------------------------------------------------------------------
// Families page
// ---------------------------------------------------------------------------

fn families(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Planten Families");
    ui.add_space(6.0);

    let Some(catalog) = &state.catalog else {
        return;
    };
    let counts = catalog.plants_per_family();

    match state.families.selected.clone() {
        None => {
            let total = catalog.families.len();
            if total == 0 {
                warning_box(ui, "Geen families gevonden.");
                return;
            }
            let idx = state.families.index(total);
            let family = &catalog.families[idx];
            family_card(ui, family, counts.get(family.name.as_str()).copied());

            ui.add_space(6.0);
            let (mut previous, mut next) = (false, false);
            ui.columns(2, |cols| {
                previous = cols[0].button("Vorige familie").clicked();
                next = cols[1].button("Volgende familie").clicked();
            });
            ui.label(format!("Familie {} van {total}", idx + 1));

            if previous {
                state.families.previous(total);
            }
            if next {
                state.families.next(total);
            }
        }
        Some(name) => {
            let mut found = false;
            for family in catalog.families_named(&name) {
                found = true;
                family_card(ui, family, counts.get(name.as_str()).copied());
                ui.separator();
            }
            if !found {
                warning_box(ui, "Geen data voor deze familie.");
            }
        }
    }
}

fn family_card(ui: &mut Ui, family: &Family, plants: Option<usize>) {
    ui.label(
        RichText::new(&family.name)
            .italics()
            .size(24.0)
            .color(TEAL),
    );
    for (label, text) in [
        ("Beschrijving", &family.description),
        ("Bladeren", &family.leaves),
        ("Bloemen", &family.flowers),
        ("Vruchten", &family.fruits),
    ] {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.strong(format!("{label}:"));
            ui.label(text);
        });
    }
    if let Some(n) = plants {
        ui.label(RichText::new(format!("{n} planten in de lijst")).weak());
    }
}
