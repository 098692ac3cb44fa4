//! Rationale and benefit copy for the heuristic suggestion path.

use crate::models::ContentType;
use crate::suggestions::need_state::NeedState;

pub fn rationale_templates(need: NeedState) -> &'static [&'static str] {
    match need {
        NeedState::Comfort => &[
            "This provides the emotional warmth and comfort that can help when things feel heavy.",
            "Chosen for its soothing and gentle tone, perfect for when you need to feel understood.",
        ],
        NeedState::Calm => &[
            "Selected to help quiet a busy mind and bring a sense of inner peace.",
            "This aligns with mindfulness and relaxation, ideal for easing anxiety.",
        ],
        NeedState::Energy => &[
            "This is uplifting and motivating, perfect for channeling your positive energy.",
            "Chosen to amplify your good mood and inspire new adventures.",
        ],
        NeedState::Growth => &[
            "This deepens focus and encourages intellectual growth in areas you care about.",
            "Selected because it challenges thinking and supports your drive for improvement.",
        ],
        NeedState::Meaning => &[
            "This explores deeper themes of purpose and understanding that resonate right now.",
            "Chosen for its philosophical depth, it speaks to your search for meaning.",
        ],
        NeedState::Exploration => &[
            "This opens doors to new ideas and perspectives you haven't explored yet.",
            "Selected to spark curiosity and broaden your horizons.",
        ],
    }
}

pub fn benefit_text(content_type: ContentType, need: NeedState) -> &'static str {
    use ContentType::*;
    use NeedState::*;

    match (content_type, need) {
        (Book, Comfort) => {
            "Reading can reduce stress by up to 68% and help process difficult emotions."
        }
        (Book, Calm) => {
            "Focused reading activates the parasympathetic nervous system, easing tension."
        }
        (Book, Energy) => "Engaging stories boost dopamine and sustain positive momentum.",
        (Book, Growth) => "Deep reading strengthens neural connections and improves focus.",
        (Book, Meaning) => "Reflective reading supports self-awareness and emotional processing.",
        (Book, Exploration) => {
            "Exploring new topics creates fresh neural pathways and perspective."
        }

        (Movie, Comfort) => "Uplifting films release oxytocin and provide emotional warmth.",
        (Movie, Calm) => "Calming films lower cortisol levels and create a meditative experience.",
        (Movie, Energy) => "Exciting films amplify positive emotions and high-energy states.",
        (Movie, Growth) => "Thought-provoking cinema stimulates critical thinking and empathy.",
        (Movie, Meaning) => {
            "Deep films invite introspection and catalyze meaningful self-reflection."
        }
        (Movie, Exploration) => {
            "Diverse cinema exposes you to new cultures, ideas, and worldviews."
        }

        (Podcast, Comfort) => {
            "Hearing a comforting voice reduces feelings of isolation and loneliness."
        }
        (Podcast, Calm) => "Guided audio content can lower stress hormones and promote relaxation.",
        (Podcast, Energy) => "Inspirational podcasts provide motivational fuel and positive drive.",
        (Podcast, Growth) => {
            "Educational podcasts support continuous learning without screen fatigue."
        }
        (Podcast, Meaning) => {
            "Deep-dive podcasts provide frameworks for understanding your experiences."
        }
        (Podcast, Exploration) => {
            "Podcasts on unfamiliar topics are the most accessible way to explore."
        }

        (Music, Comfort) => "Soft, familiar melodies activate the brain's reward system.",
        (Music, Calm) => {
            "Slow-tempo music (60-80 BPM) synchronizes with your heart rate for relaxation."
        }
        (Music, Energy) => "Upbeat music boosts dopamine, serotonin, and norepinephrine.",
        (Music, Growth) => "Instrumental music creates an optimal focus environment.",
        (Music, Meaning) => "Music with depth can mirror your inner state and process emotions.",
        (Music, Exploration) => "Discovering new genres keeps novelty-seeking circuits active.",
    }
}
