/*!
 * Bundled sample articles for trying the summarizer without any input file.
 */

use std::fmt;

/// A bundled demonstration article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Technology news article
    News,
    /// Neuroscience research digest
    Research,
    /// Web development blog post
    Blog,
}

impl Sample {
    /// All bundled samples
    pub const ALL: [Sample; 3] = [Sample::News, Sample::Research, Sample::Blog];

    /// Full text of the article
    pub fn text(&self) -> &'static str {
        match self {
            Self::News => NEWS,
            Self::Research => RESEARCH,
            Self::Blog => BLOG,
        }
    }

    /// Short identifier
    pub fn name(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Research => "research",
            Self::Blog => "blog",
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const NEWS: &str = r#"Artificial Intelligence is revolutionizing the technology industry at an unprecedented pace. Major tech companies are investing billions of dollars in AI research and development, leading to breakthrough innovations in machine learning, natural language processing, and computer vision. These advancements are not only transforming how businesses operate but also reshaping entire industries from healthcare to finance. The rapid adoption of AI-powered tools has increased productivity across various sectors, with many organizations reporting significant improvements in efficiency and decision-making processes. However, this technological revolution also brings challenges including job displacement concerns, ethical considerations around data privacy, and the need for new regulatory frameworks. Experts predict that AI will continue to evolve rapidly, with the next decade likely to see even more sophisticated applications that could fundamentally change how we work, communicate, and live our daily lives."#;

const RESEARCH: &str = r#"Recent studies in neuroscience have revealed fascinating insights into the human brain's plasticity and its ability to adapt throughout life. Researchers at leading universities have discovered that neuroplasticity, the brain's capacity to reorganize and form new neural connections, continues well into old age, challenging previous assumptions about cognitive decline. Through advanced neuroimaging techniques and longitudinal studies involving thousands of participants, scientists have identified specific factors that promote brain health and cognitive resilience. Regular physical exercise, particularly aerobic activities, has been shown to stimulate the production of brain-derived neurotrophic factor (BDNF), a protein crucial for neuron survival and growth. Additionally, engaging in complex cognitive tasks, learning new skills, and maintaining social connections all contribute to building cognitive reserve. The research also highlights the importance of quality sleep in memory consolidation and the removal of toxic proteins associated with neurodegenerative diseases. These findings have significant implications for developing interventions to prevent cognitive decline and potentially treat neurological disorders."#;

const BLOG: &str = r#"Building modern web applications requires mastering a complex ecosystem of tools, frameworks, and best practices. As a developer in 2024, you'll need to navigate through choices between React, Vue, Angular, or newer frameworks like Svelte and SolidJS. Each framework has its strengths and use cases, making the selection process crucial for project success. React continues to dominate with its vast ecosystem and job market demand, while Vue offers simplicity and gentle learning curve. Angular provides enterprise-grade features but comes with steeper complexity. Beyond frameworks, modern development involves understanding build tools like Vite, Webpack, or Rollup, state management solutions such as Redux, Zustand, or Pinia, and CSS approaches ranging from traditional stylesheets to CSS-in-JS and utility frameworks like Tailwind CSS. Testing has become integral with tools like Jest, Vitest, and Playwright ensuring code quality. Deployment strategies now favor containerization with Docker, serverless functions, and edge computing platforms. The key to success lies not in mastering every tool, but in understanding fundamental concepts and choosing the right tool for specific project requirements while staying updated with the rapidly evolving landscape."#;
