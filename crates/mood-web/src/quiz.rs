//! DOM wiring for the mood quiz panel.
//!
//! The page supplies the panel skeleton (question text, progress bar, answer
//! slider, choice buttons); this module shows/hides it and feeds answers into
//! the core [`QuizSession`].

use std::cell::RefCell;
use std::rc::Rc;

use web_sys as web;

use mood_core::{
    apply_result, Answer, MoodStore, QuestionKind, QuizProgress, QuizSession, QUESTIONS,
};

use crate::{announce, dom};

pub type SharedQuiz = Rc<RefCell<Option<QuizSession>>>;

const PANEL_ID: &str = "quiz-panel";
const QUESTION_ID: &str = "quiz-question";
const COUNT_ID: &str = "quiz-count";
const PROGRESS_ID: &str = "quiz-progress";

pub fn open(document: &web::Document, store: &Rc<RefCell<MoodStore>>, session: &SharedQuiz) {
    store.borrow_mut().open_quiz();
    *session.borrow_mut() = Some(QuizSession::new());
    show(document);
    render(document, session);
}

/// Discard all in-progress answers without touching vibe/palette/intensity.
pub fn cancel(document: &web::Document, store: &Rc<RefCell<MoodStore>>, session: &SharedQuiz) {
    *session.borrow_mut() = None;
    store.borrow_mut().close_quiz();
    hide(document);
    announce::announce(document, "Quiz closed");
}

pub fn submit_answer(
    document: &web::Document,
    store: &Rc<RefCell<MoodStore>>,
    session: &SharedQuiz,
    answer: Answer,
) {
    let progress = {
        let mut guard = session.borrow_mut();
        let Some(active) = guard.as_mut() else {
            return;
        };
        // A slider event during a choice question (or vice versa) is stray
        // input from the hidden control; ignore it.
        let expects = active.current_question().kind;
        let compatible = matches!(
            (expects, answer),
            (QuestionKind::Scale { .. }, Answer::Scale(_))
                | (QuestionKind::Choice { .. }, Answer::Choice(_))
        );
        if !compatible {
            return;
        }
        active.answer(answer)
    };
    match progress {
        QuizProgress::AwaitingAnswer(_) => render(document, session),
        QuizProgress::Resolved(vibe) => {
            *session.borrow_mut() = None;
            apply_result(&mut store.borrow_mut(), vibe);
            hide(document);
            announce::announce(document, &format!("Quiz complete: {vibe} mood applied"));
        }
    }
}

/// Map a choice token coming from the DOM back to the current question's
/// static token; unknown tokens are dropped.
pub fn choice_answer(session: &SharedQuiz, token: &str) -> Option<Answer> {
    let guard = session.borrow();
    let active = guard.as_ref()?;
    if let QuestionKind::Choice { choices } = active.current_question().kind {
        choices
            .iter()
            .copied()
            .find(|(_, t)| *t == token)
            .map(|(_, t)| Answer::Choice(t))
    } else {
        None
    }
}

fn render(document: &web::Document, session: &SharedQuiz) {
    let guard = session.borrow();
    let Some(active) = guard.as_ref() else {
        return;
    };
    let question = active.current_question();
    let index = active.question_index();
    dom::set_text_content(document, QUESTION_ID, question.text);
    dom::set_text_content(
        document,
        COUNT_ID,
        &format!("Question {} of {}", index + 1, QUESTIONS.len()),
    );
    if let Some(bar) = document.get_element_by_id(PROGRESS_ID) {
        let pct = ((index + 1) as f32 / QUESTIONS.len() as f32) * 100.0;
        let _ = bar.set_attribute("style", &format!("width:{pct:.0}%"));
    }
}

fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        let _ = el.set_attribute("style", "");
    }
}

fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}
