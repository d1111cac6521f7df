use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Clone, Debug)]
pub struct Item {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct Section {
    pub title: Option<&'static str>,
    pub items: Vec<Item>,
    // Image URIs, loaded through egui's image loaders
    pub snapshots: Vec<&'static str>,
}

#[derive(Clone, Debug, Default)]
pub struct ContentRecord {
    pub subtitle: Option<&'static str>,
    pub sections: Vec<Section>,
    pub project_url: Option<&'static str>,
    pub show_section_titles: bool,
    pub section_dividers: bool,
}

fn items(pairs: &[(&'static str, &'static str)]) -> Vec<Item> {
    pairs.iter().map(|&(label, value)| Item { label, value }).collect()
}

fn section(title: Option<&'static str>, pairs: &[(&'static str, &'static str)], snapshots: &[&'static str]) -> Section {
    Section { title, items: items(pairs), snapshots: snapshots.to_vec() }
}

fn record(subtitle: &'static str, sections: Vec<Section>) -> ContentRecord {
    ContentRecord {
        subtitle: Some(subtitle),
        sections,
        project_url: None,
        show_section_titles: true,
        section_dividers: false,
    }
}

const ANATOMIE_SNAPSHOTS: [&str; 4] = [
    "file://assets/snapshots/anatomie_1.png",
    "file://assets/snapshots/anatomie_2.png",
    "file://assets/snapshots/anatomie_3.png",
    "file://assets/snapshots/anatomie_4.png",
];
const RESEARCH_SNAPSHOTS: [&str; 3] = [
    "file://assets/snapshots/research_1.png",
    "file://assets/snapshots/research_2.png",
    "file://assets/snapshots/research_3.png",
];
const DIANALYSIS_SNAPSHOT: &str = "file://assets/snapshots/dianalysis_1.png";
const ASSISTANT_SNAPSHOT: &str = "file://assets/snapshots/educational_assistant_1.png";
const PORTRAIT_SNAPSHOT: &str = "file://assets/snapshots/portrait_1.png";

/// Inspector records keyed by node title.
pub static INSPECTOR_CONTENT: Lazy<HashMap<&'static str, ContentRecord>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert("education", record("Educational Background", vec![section(
        None,
        &[
            ("university", "University of Miami"),
            ("degree", "B.A. Computer Science"),
            ("major", "Computer Science"),
            ("minor", "Communication"),
            ("cognate", "Psychology"),
            ("honors", "Dean's List '25"),
            ("graduation_date", "2025"),
        ],
        &[PORTRAIT_SNAPSHOT],
    )]));

    let mut research = record("Research Projects & Analysis", vec![section(
        Some("Music & Mental Health Study"),
        &[
            ("project", "Music & Mental Health: Genre, Listening Habits, Mood Effects (2025)"),
            ("dataset", "MXMH Survey (Kaggle), 10k+ participants"),
            ("variables", "genre dose, listening time, mood improvement, well-being indicators"),
            ("analysis_method", "logistic regression, adjusted models, visualization"),
            ("findings", "genre-specific associations predicting emotional improvement, controlling for hours/day"),
            ("github", "https://github.com/edebbyi/music-mental-health-analysis"),
        ],
        &RESEARCH_SNAPSHOTS,
    )]);
    research.project_url = Some("https://github.com/edebbyi/music-mental-health-analysis");
    m.insert("research_analysis", research);

    m.insert("about", record("Professional Identity & Philosophy", vec![section(
        None,
        &[
            ("identity", "I work at the intersection of data, automation, intelligent systems, tools, and workflows that people can depend on."),
            ("focus", "translating real questions into reliable data products, clear insights, and simple systems that support strong decision-making"),
            ("mission", "build thoughtful, dependable solutions where data, usability, and real-world context work together"),
            ("philosophy", "\"questions before conclusions\""),
            ("domains", "health analytics, learning and well-being, applied AI, civic and nonprofit systems"),
            ("style", "collaborative, structured, big-picture, constructive"),
        ],
        &[PORTRAIT_SNAPSHOT],
    )]));

    m.insert("toolkit", record("Technical Skills & Competencies", vec![section(
        Some("Core Skills"),
        &[
            ("stats_ability", "descriptive, regression, inference"),
            ("languages", "Python, SQL"),
            ("tools", "pandas, NumPy, scikit-learn, dbt, Looker, BigQuery, Power BI, Git, Jupyter Notebooks"),
            ("visualization", "clean minimal plots, interpretability-first"),
            ("modeling_style", "transparent, interpretable, methodical"),
            ("communication_skill", "structured explanations, clear story"),
        ],
        &[],
    )]));

    let mut work = record("Professional Experience", vec![
        section(
            Some("Anatomie AI"),
            &[
                ("company", "Anatomie AI"),
                ("role", "Founding Product AI Engineer, Automation & Data Systems"),
                ("responsibilities", "Led full lifecycle of internal AI/data tools, built multi-agent automation + generation pipelines, defined system requirements from stakeholder needs, created tooling and dashboards for evaluating performance, partnered with teams to refine features and reliability"),
                ("timeframe", "2024-Present"),
            ],
            &ANATOMIE_SNAPSHOTS,
        ),
        section(
            Some("Morningstar Home Health"),
            &[
                ("company", "Morningstar Home Health"),
                ("role", "Data Analyst Intern"),
                ("responsibilities", "created dashboards, ran quality-of-care analytics, supported care-coordination reporting"),
                ("timeframe", "2023-2024"),
            ],
            &[],
        ),
        section(
            Some("Harris for President"),
            &[
                ("company", "Harris for President"),
                ("role", "Data Science Intern"),
                ("responsibilities", "analyzed early-voting data, engineered features for modeling, and built demographic visualizations for swing-state trends"),
                ("timeframe", "2024"),
            ],
            &[],
        ),
        section(
            Some("Outlier"),
            &[
                ("company", "Outlier"),
                ("role", "AI Model Trainer"),
                ("responsibilities", "LLM instruction-tuning tasks, evaluation, quality oversight"),
                ("timeframe", "2024"),
            ],
            &[],
        ),
    ]);
    work.show_section_titles = false;
    work.section_dividers = true;
    m.insert("work_experience", work);

    m.insert("advocacy", record("Community Advocacy & Impact", vec![section(
        None,
        &[
            ("organization", "Girls Who Code x Art (Miami)"),
            ("role", "STEM Mentor & Creative Coding Support"),
            ("program", "Creative Coding & Confidence-Building Workshops"),
            ("population_served", "middle- and high-school girls in underserved communities"),
            ("impact_summary", "mentorship, coding sessions, project guidance"),
            ("year", "2025"),
        ],
        &[],
    )]));

    let mut volunteering = record("Volunteer Work & Service", vec![
        section(
            Some("Reading Pals"),
            &[
                ("organization", "Reading Pals (United Way)"),
                ("role", "Early Literacy Mentor"),
                ("population_served", "young children (K-1st grade)"),
                ("year", "2025"),
                ("summary", "one-on-one reading sessions, early literacy support"),
            ],
            &[],
        ),
        section(
            Some("Mind & Melody"),
            &[
                ("organization", "Mind & Melody"),
                ("role", "Alzheimer's Music Therapy Volunteer"),
                ("population_served", "older adults with degenerative cognitive conditions"),
                ("year", "2025"),
                ("summary", "music-based engagement sessions supporting mood and memory"),
            ],
            &[],
        ),
    ]);
    volunteering.show_section_titles = false;
    volunteering.section_dividers = true;
    m.insert("volunteering", volunteering);

    m.insert("certification", record("Professional Certifications", vec![section(
        None,
        &[
            ("certification_name", "Career Essentials in Data Analysis"),
            ("granting_organization", "Microsoft & LinkedIn"),
            ("year", "2024"),
            ("credential_id", "c06ee2518bfd1dd700a7290c9dda65b9e3848960af63215137dd7cd7f45f3a0"),
            ("notes", "includes foundations in data analysis, visualization, Excel, and dashboards"),
        ],
        &[],
    )]));

    m.insert("system_guide", record("How to Navigate This Workspace", vec![section(
        None,
        &[
            ("interaction", "tap or click any table to open its details"),
            ("system_navigation", "use the menu on the left to jump directly to a table"),
            ("click_rules", "click the X in the corner to close the inspector panel"),
            ("keyboard_shortcuts", "on desktop, arrow keys can move between tables (optional)"),
            ("line_meaning", "lines show conceptual relationships, not strict dependencies"),
            ("node_meaning", "each table represents part of my professional work"),
            ("image_guide", "tap an image to view it larger; tap outside the image to close it"),
        ],
        &[],
    )]));

    m.insert("contact", record("Let's Get In Touch", vec![section(
        None,
        &[
            ("email", "edebbyi305@gmail.com"),
            ("location", "Miami, FL"),
            ("portfolio", "tech.deborahi.com"),
            ("social", "icons"),
        ],
        &[],
    )]));

    let mut projects = record("Highlighted Personal Projects", vec![
        section(
            None,
            &[
                ("project_name", "Dianalysis"),
                ("project_type", "nutrition-label classifier and diabetes-risk scoring system"),
                ("overview", "A rule-based and regression-calibrated scoring pipeline that evaluates packaged foods using metabolic risk logic and curated alternatives."),
                ("what_it_does", "Scores items using engineered features, generates a metabolic risk score out of five, and provides interpretable justifications for each recommendation."),
                ("technical_notes", "Rule-based feature logic, calibrated LogisticRegression model, Streamlit UI for barcode lookup, synthetic-data training pipeline, reproducible artifact folder."),
                ("link", "https://github.com/edebbyi/dianalysis"),
            ],
            &[DIANALYSIS_SNAPSHOT],
        ),
        section(
            None,
            &[
                ("project_name", "Educational AI Assistant"),
                ("project_type", "Document-grounded Q&A system with tool-calling agent"),
                ("overview", "An intelligent assistant that reads, searches, and summarizes user documents using dynamic tool selection and multi-step reasoning."),
                ("what_it_does", "Chooses tools autonomously, retrieves relevant text, answers questions with citations, and adapts its reasoning based on user follow-ups."),
                ("technical_notes", "LangChain agent with tool-calling, Pinecone vector store, windowed conversational memory, Streamlit multi-user interface, encrypted credential storage."),
                ("link", "https://github.com/edebbyi/education-assistant"),
            ],
            &[ASSISTANT_SNAPSHOT],
        ),
    ]);
    projects.section_dividers = true;
    m.insert("personal_projects", projects);

    m
});

pub fn lookup(title: &str) -> Option<&'static ContentRecord> {
    INSPECTOR_CONTENT.get(title)
}
