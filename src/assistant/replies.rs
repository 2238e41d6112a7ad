//! Canned reply set for the portfolio assistant.
//!
//! Every response the assistant can give is pre-written here; the responder
//! only ever picks one of these topics. Reply copy mirrors the portfolio
//! content (resume, projects, contact details) so the assistant never invents
//! facts.

use serde::{Deserialize, Serialize};

/// Topic resolved from a visitor utterance. Each topic owns exactly one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTopic {
    Resume,
    Writing,
    Themes,
    Game,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Achievements,
    Social,
    General,
}

impl ReplyTopic {
    /// The canned reply shown for this topic.
    pub fn reply_text(self) -> &'static str {
        match self {
            ReplyTopic::Resume => {
                "You can view Manjeet's resume in both 2D and 3D formats! The resume includes his \
                 education (BCA Final Year at Jagannath University), experience at LinuxWorld, \
                 technical skills, and achievements. You can also download it as a PDF."
            }
            ReplyTopic::Writing => {
                "Manjeet writes technical articles on platforms like Hashnode, Dev.to, and Notion. \
                 His recent articles cover CI/CD pipelines with Jenkins & Kubernetes, integrating \
                 GenAI with DevOps workflows, and how Agentic AI is reshaping cloud monitoring."
            }
            ReplyTopic::Themes => {
                "You can switch between three amazing themes: Professional White (clean & \
                 corporate), Developer Black (terminal-style), and Neo Gradient (futuristic with \
                 purple/pink gradients). Just click the light bulb icon in the top-right corner!"
            }
            ReplyTopic::Game => {
                "The interactive game feature will appear after 2 minutes of inactivity! It's \
                 designed to keep visitors engaged while exploring the portfolio. Stay tuned for \
                 some fun tech-themed games!"
            }
            ReplyTopic::Skills => {
                "Manjeet specializes in AI DevOps, Cloud Engineering, and Fullstack Development. \
                 His key technologies include Jenkins, Docker, Kubernetes, AWS, Python, React, and \
                 various AI/ML frameworks like TensorFlow and LangChain."
            }
            ReplyTopic::Projects => {
                "Manjeet has worked on several impressive projects including a CI&CT automation \
                 system, ML + DevOps pipeline, Agentic AIops system, Streamlit AI dashboard, \
                 AutoInfra Bot, and an accident response system that won 3rd place in an \
                 Inter-University Hackathon!"
            }
            ReplyTopic::Experience => {
                "Manjeet completed a 2-month Multi-Tech Internship at LinuxWorld Informatics Pvt \
                 Ltd in Jaipur, where he built multiple AI-integrated projects and gained hands-on \
                 experience in DevOps and Cloud technologies."
            }
            ReplyTopic::Education => {
                "Manjeet is currently in his final year of BCA at Jagannath University. He's also \
                 achieved recognition in various hackathons and sports competitions."
            }
            ReplyTopic::Contact => {
                "You can reach Manjeet at mkdas62999@gmail.com or call/WhatsApp him at 8757119995. \
                 He's also active on LinkedIn, GitHub, and Telegram!"
            }
            ReplyTopic::Achievements => {
                "Manjeet has achieved 2nd place in Jaipur Hackathon 2023, 3rd place in \
                 Inter-University Hackathon 2024, and is also a Volleyball Champion! He's \
                 passionate about both technology and sports."
            }
            ReplyTopic::Social => {
                "You can reach Manjeet on WhatsApp at +91 8757119995, Telegram @manjeet_mjk, \
                 LinkedIn, or GitHub @manjeet2756. He's very responsive and loves connecting with \
                 fellow tech enthusiasts!"
            }
            ReplyTopic::General => {
                "That's an interesting question! Manjeet is a passionate AI DevOps engineer with \
                 expertise in Cloud technologies and Fullstack development. Feel free to ask about \
                 his skills, projects, experience, or achievements!"
            }
        }
    }
}

/// Opening message shown before the visitor has typed anything.
pub fn greeting() -> String {
    "Hi! I'm Maan, Manjeet's AI assistant. Ask me anything about his portfolio, skills, or \
     projects!"
        .into()
}
