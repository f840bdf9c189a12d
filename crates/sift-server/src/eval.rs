//! Extraction quality evaluation against a running server.
//!
//! Posts a fixed set of labelled texts to `/analyze` and compares the returned
//! sentiment and topics with the labels.

use std::time::Duration;

use serde_json::Value;
use sift_core::Sentiment;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// A labelled evaluation input.
#[derive(Debug, Clone, Copy)]
pub struct EvalCase {
    pub name: &'static str,
    pub text: &'static str,
    pub expected_sentiment: Sentiment,
    pub expected_topics: &'static [&'static str],
}

pub const CASES: &[EvalCase] = &[
    EvalCase {
        name: "Healthcare AI - Positive",
        text: "Artificial intelligence is revolutionizing healthcare diagnostics. \
               Recent breakthroughs in deep learning enable doctors to detect cancer \
               earlier with unprecedented accuracy. Hospitals are deploying AI-powered \
               systems that analyze medical images faster than human radiologists. \
               This technology promises to save thousands of lives annually.",
        expected_sentiment: Sentiment::Positive,
        expected_topics: &["healthcare", "AI", "diagnostics"],
    },
    EvalCase {
        name: "Cybersecurity Breach - Negative",
        text: "A massive data breach compromised millions of customer accounts yesterday. \
               The company's security infrastructure failed to detect the intrusion for weeks. \
               Hackers stole sensitive financial information and personal data. Customers are \
               furious about the negligence, and the company faces potential lawsuits and \
               regulatory fines. Stock prices plummeted 30% following the announcement.",
        expected_sentiment: Sentiment::Negative,
        expected_topics: &["security", "breach", "data"],
    },
    EvalCase {
        name: "Tech Report - Neutral",
        text: "The quarterly earnings report shows stable growth in cloud computing revenue. \
               The company maintained its market share at 23 percent during Q3. Employee \
               headcount increased by 500 positions across engineering teams. Capital \
               expenditure on infrastructure remained consistent with previous quarters. \
               Analysts project similar performance for the upcoming period.",
        expected_sentiment: Sentiment::Neutral,
        expected_topics: &["earnings", "cloud computing", "business"],
    },
    EvalCase {
        name: "Climate Change - Negative",
        text: "Global temperatures reached record highs this summer, causing devastating \
               wildfires across three continents. Scientists warn that current emission \
               trends will lead to catastrophic consequences within decades. Coastal \
               cities face increased flooding risks as ice caps continue melting at \
               alarming rates. Urgent action is needed to prevent irreversible damage.",
        expected_sentiment: Sentiment::Negative,
        expected_topics: &["climate change", "environment", "global warming"],
    },
    EvalCase {
        name: "Product Launch - Positive",
        text: "Apple unveiled its latest iPhone model featuring groundbreaking camera \
               technology and extended battery life. Pre-orders exceeded expectations \
               with over 2 million units sold in the first 24 hours. Customers praised \
               the innovative design and improved performance. Industry analysts predict \
               this will be the most successful product launch in the company's history.",
        expected_sentiment: Sentiment::Positive,
        expected_topics: &["technology", "product launch", "iPhone"],
    },
    EvalCase {
        name: "Short News - Edge Case",
        text: "Bitcoin prices surged 15% today following institutional adoption news.",
        expected_sentiment: Sentiment::Positive,
        expected_topics: &["cryptocurrency", "bitcoin", "finance"],
    },
    EvalCase {
        name: "Research Paper Abstract",
        text: "This paper presents a novel approach to neural architecture search using \
               reinforcement learning. We propose a method that automatically discovers \
               optimal network configurations for image classification tasks. Our experiments \
               on ImageNet demonstrate a 2.3% improvement over previous state-of-the-art \
               models while reducing computational cost by 40%. The technique generalizes \
               well across multiple computer vision benchmarks.",
        expected_sentiment: Sentiment::Neutral,
        expected_topics: &["machine learning", "research", "neural networks"],
    },
    EvalCase {
        name: "Customer Service Complaint",
        text: "I ordered a laptop three weeks ago and still haven't received it. Customer \
               service is unresponsive and unhelpful. When I finally reached someone, they \
               had no information about my shipment. This is terrible service and I'm \
               extremely disappointed. I will never shop here again and will warn others \
               to avoid this company. Completely unacceptable experience.",
        expected_sentiment: Sentiment::Negative,
        expected_topics: &["customer service", "complaint", "shopping"],
    },
];

/// Outcome of one case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub success: bool,
    pub sentiment: Option<Sentiment>,
    pub sentiment_match: bool,
    /// Expected topics found among the returned topics or keywords.
    pub topic_hits: usize,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
    pub error: Option<String>,
}

impl CaseResult {
    fn failed(case: &EvalCase, error: String) -> Self {
        Self {
            name: case.name.to_string(),
            success: false,
            sentiment: None,
            sentiment_match: false,
            topic_hits: 0,
            topics: Vec::new(),
            keywords: Vec::new(),
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EvalReport {
    pub base_url: String,
    pub results: Vec<CaseResult>,
}

impl EvalReport {
    pub fn successes(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn sentiment_correct(&self) -> usize {
        self.results.iter().filter(|r| r.sentiment_match).count()
    }

    /// Fraction of expected topics recovered, over all cases.
    pub fn topic_recall(&self, cases: &[EvalCase]) -> f64 {
        let expected: usize = cases.iter().map(|c| c.expected_topics.len()).sum();
        if expected == 0 {
            return 0.0;
        }
        let hits: usize = self.results.iter().map(|r| r.topic_hits).sum();
        hits as f64 / expected as f64
    }
}

/// Score a 201 response body against its case.
pub fn score_case(case: &EvalCase, body: &Value) -> CaseResult {
    let strings = |key: &str| -> Vec<String> {
        body[key]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    };
    let topics = strings("topics");
    let keywords = strings("keywords");
    let sentiment = body["sentiment"].as_str().and_then(|s| s.parse().ok());

    let found: Vec<String> = topics
        .iter()
        .chain(keywords.iter())
        .map(|s| s.to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    let topic_hits = case
        .expected_topics
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| found.iter().any(|f| f.contains(t.as_str()) || t.contains(f.as_str())))
        .count();

    CaseResult {
        name: case.name.to_string(),
        success: true,
        sentiment,
        sentiment_match: sentiment == Some(case.expected_sentiment),
        topic_hits,
        topics,
        keywords,
        error: None,
    }
}

/// Run every case against `base_url`. Fails only if the server is unreachable.
pub async fn run(base_url: &str, cases: &[EvalCase]) -> anyhow::Result<EvalReport> {
    let base_url = base_url.trim_end_matches('/').to_string();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let health = client
        .get(format!("{}/", base_url))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("Could not connect to server at {}: {}", base_url, e))?;
    if !health.status().is_success() {
        anyhow::bail!("Server at {} is not healthy ({})", base_url, health.status());
    }

    let mut results = Vec::with_capacity(cases.len());
    for case in cases {
        let response = client
            .post(format!("{}/analyze", base_url))
            .json(&serde_json::json!({ "text": case.text }))
            .send()
            .await;

        let result = match response {
            Ok(resp) if resp.status() == reqwest::StatusCode::CREATED => match resp.json::<Value>().await {
                Ok(body) => score_case(case, &body),
                Err(e) => CaseResult::failed(case, format!("Unreadable response: {}", e)),
            },
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                CaseResult::failed(case, format!("{}: {}", status, body))
            }
            Err(e) => CaseResult::failed(case, e.to_string()),
        };
        results.push(result);
    }

    Ok(EvalReport { base_url, results })
}

/// Print an evaluation report to stdout.
pub fn print_report(report: &EvalReport, cases: &[EvalCase]) {
    let rule = "=".repeat(80);
    println!("{}", rule);
    println!("LLM Knowledge Extractor — quality evaluation ({})", report.base_url);
    println!("{}", rule);

    for (case, result) in cases.iter().zip(&report.results) {
        println!();
        println!("{}", case.name);
        match &result.error {
            Some(err) => println!("  ERROR: {}", err),
            None => {
                println!("  Topics:    {}", result.topics.join(", "));
                println!("  Keywords:  {}", result.keywords.join(", "));
                println!(
                    "  Sentiment: {} (expected {}) {}",
                    result.sentiment.map(|s| s.to_string()).unwrap_or_else(|| "?".into()),
                    case.expected_sentiment,
                    if result.sentiment_match { "✓" } else { "✗" }
                );
                println!(
                    "  Topic hits: {}/{} of {}",
                    result.topic_hits,
                    case.expected_topics.len(),
                    case.expected_topics.join(", ")
                );
            }
        }
    }

    let total = report.results.len().max(1) as f64;
    println!();
    println!("{}", rule);
    println!(
        "Successful extractions: {}/{} ({:.1}%)",
        report.successes(),
        report.results.len(),
        report.successes() as f64 / total * 100.0
    );
    println!(
        "Correct sentiment:      {}/{} ({:.1}%)",
        report.sentiment_correct(),
        report.results.len(),
        report.sentiment_correct() as f64 / total * 100.0
    );
    println!("Topic recall:           {:.1}%", report.topic_recall(cases) * 100.0);
}
