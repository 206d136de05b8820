//! Financial education tips
//!
//! A fixed catalog of short articles grouped by topic and difficulty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipTopic {
    Budgeting,
    Saving,
    Investing,
    Debt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for TipTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Budgeting => "Budgeting",
            Self::Saving => "Saving",
            Self::Investing => "Investing",
            Self::Debt => "Debt",
        };
        f.pad(s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        f.pad(s)
    }
}

impl FromStr for TipTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budgeting" => Ok(Self::Budgeting),
            "saving" => Ok(Self::Saving),
            "investing" => Ok(Self::Investing),
            "debt" => Ok(Self::Debt),
            other => Err(format!("unknown topic '{}'", other)),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// A single tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinancialTip {
    pub title: &'static str,
    pub content: &'static str,
    pub topic: TipTopic,
    pub difficulty: Difficulty,
}

const fn tip(
    title: &'static str,
    content: &'static str,
    topic: TipTopic,
    difficulty: Difficulty,
) -> FinancialTip {
    FinancialTip {
        title,
        content,
        topic,
        difficulty,
    }
}

use Difficulty::{Advanced, Beginner, Intermediate};
use TipTopic::{Budgeting, Debt, Investing, Saving};

/// The full catalog, ordered beginner to advanced
pub static TIPS: [FinancialTip; 15] = [
    tip(
        "Start with a Simple Budget",
        "Create a basic budget by tracking all your income and expenses for a month. \
         Write down everything you spend, from coffee to rent. This awareness is the first \
         step to taking control of your finances. Use categories like housing, food, \
         transportation, and entertainment to organize your spending.",
        Budgeting,
        Beginner,
    ),
    tip(
        "Build an Emergency Fund",
        "Start by saving $1,000 for unexpected expenses like car repairs or medical bills. \
         Keep this money in a separate savings account that's easy to access but not too easy \
         to spend. Once you have $1,000, work towards 3-6 months of living expenses. This fund \
         provides peace of mind and prevents you from going into debt when emergencies happen.",
        Saving,
        Beginner,
    ),
    tip(
        "Pay Yourself First",
        "Set up automatic transfers to your savings account on payday. Even if it's just $25 \
         or $50, make saving a priority before you spend on anything else. This simple habit \
         ensures you're consistently building wealth. Over time, try to increase the amount as \
         your income grows.",
        Saving,
        Beginner,
    ),
    tip(
        "Understand Needs vs. Wants",
        "Before making a purchase, ask yourself: 'Do I need this or do I want this?' Needs are \
         essentials like food, shelter, and basic clothing. Wants are nice-to-haves like the \
         latest phone or eating out. Being honest about this distinction helps you make better \
         spending decisions and avoid impulse purchases.",
        Budgeting,
        Beginner,
    ),
    tip(
        "Start Small with Debt Repayment",
        "If you have multiple debts, list them all with their balances and interest rates. \
         Start by paying minimum payments on everything, then put extra money toward either the \
         smallest debt (for quick wins) or the highest interest debt (to save money). Celebrate \
         each debt you eliminate to stay motivated.",
        Debt,
        Beginner,
    ),
    tip(
        "Master the 50/30/20 Rule",
        "Allocate 50% of your after-tax income to needs (housing, food, utilities, insurance), \
         30% to wants (dining out, hobbies, streaming services), and 20% to savings and debt \
         repayment. This framework provides balance while ensuring you're building wealth. \
         Adjust the percentages based on your situation: if you have high-interest debt, \
         consider shifting more to the 20% category.",
        Budgeting,
        Intermediate,
    ),
    tip(
        "Invest in Your Future",
        "Once you have an emergency fund and manageable debt, start investing for retirement. \
         If your employer offers a 401(k) match, contribute at least enough to get the full \
         match. Consider opening a Roth IRA for tax-free growth. Start with low-cost index funds \
         that track the market. Compound interest means starting early, even with small \
         amounts, can lead to significant wealth over decades.",
        Investing,
        Intermediate,
    ),
    tip(
        "Optimize Your Credit Score",
        "Your credit score affects loan interest rates, insurance premiums, and even job \
         prospects. Pay all bills on time (35% of score), keep credit utilization below 30% \
         (30% of score), maintain old credit accounts (15% of score), limit new credit \
         applications, and diversify your credit mix. Check your credit report annually for \
         errors and dispute any inaccuracies.",
        Debt,
        Intermediate,
    ),
    tip(
        "Automate Your Finances",
        "Set up automatic bill payments, savings transfers, and investment contributions. \
         Automation removes the mental burden of remembering to pay bills and keeps you \
         consistently working toward your goals. Make sure you have enough in your checking \
         account to cover all automatic withdrawals, and review your accounts monthly to catch \
         any errors.",
        Budgeting,
        Intermediate,
    ),
    tip(
        "Review and Adjust Regularly",
        "Schedule a monthly 'money date' with yourself to review your budget, track progress \
         toward goals, and adjust as needed. Income increases, rent goes up, new expenses \
         arise. Your budget should evolve with you. Use this time to celebrate wins and \
         recommit to your financial goals.",
        Budgeting,
        Intermediate,
    ),
    tip(
        "Tax-Advantaged Investing Strategies",
        "Maximize tax-advantaged accounts: contribute to a 401(k) up to the employer match, \
         max out a Roth IRA, then increase 401(k) contributions up to the annual limit. \
         Consider HSAs for triple tax benefits if you have a high-deductible health plan. \
         Understand the difference between traditional (tax-deferred) and Roth (tax-free \
         growth) accounts to optimize your tax situation now and in retirement.",
        Investing,
        Advanced,
    ),
    tip(
        "Asset Allocation and Rebalancing",
        "Diversify your investments across stocks, bonds, and other assets based on your age, \
         risk tolerance, and timeline. A common rule is to hold (120 minus your age)% in \
         stocks. Rebalance annually by selling overweighted assets and buying underweighted \
         ones to maintain your target allocation.",
        Investing,
        Advanced,
    ),
    tip(
        "Optimize Debt Strategically",
        "Not all debt is bad. Low-interest debt (like a mortgage at 3%) can be beneficial if \
         you can earn higher returns investing. Focus on eliminating high-interest debt (credit \
         cards above 15%) aggressively. For student loans, compare the interest rate to \
         potential investment returns and consider refinancing if rates have dropped.",
        Debt,
        Advanced,
    ),
    tip(
        "Build Multiple Income Streams",
        "Diversify your income sources to increase financial security and accelerate wealth \
         building: side businesses, freelancing, rental income, dividend-paying investments, \
         or digital products. Each additional income stream reduces your dependence on a \
         single source. Start with one additional stream and grow from there.",
        Investing,
        Advanced,
    ),
    tip(
        "Plan for Major Life Events",
        "Factor in large future expenses: buying a home, having children, weddings, education \
         costs. Create dedicated savings accounts for each goal with specific timelines. For \
         goals within 5 years, use conservative investments like high-yield savings or bonds. \
         For longer-term goals, you can afford more risk. Review these plans annually.",
        Saving,
        Advanced,
    ),
];

/// Tips matching the optional filters, in catalog order
pub fn filter_tips(
    topic: Option<TipTopic>,
    difficulty: Option<Difficulty>,
) -> Vec<&'static FinancialTip> {
    TIPS.iter()
        .filter(|t| topic.map_or(true, |topic| t.topic == topic))
        .filter(|t| difficulty.map_or(true, |d| t.difficulty == d))
        .collect()
}
