//! # Reference Bill Text
//!
//! The single fixed legislative summary the system reasons over, partitioned
//! into sections by blank lines. The text is read-only, defined at build time,
//! and never mutated; the blank-line split is the unit of selection used by
//! the retrieval module.

/// The H.R. 1 summary text, sectioned by blank lines.
pub const BILL_TEXT: &str = r#"
H.R. 1 – 'One Big Beautiful Bill'

1. Tax & Finance (Title VII)
Sec 701 – Extension of Personal Tax Provisions
- Child Tax Credit (Sec 701(a), new §24(h)): extends $2,000 per qualifying child through tax year 2027; refundable amount
- Earned Income Tax Credit (Sec 701(b), §32(m)): indexed phase-in; phase-out thresholds +5%.
- Qualified Business Income Deduction (Sec 701(c), §199A(g)): maintains 20% deduction; expands aggregation rules.
Sec 702 – New Income Exclusions
- Tips & Overtime (Sec 702(a), amending §61): excludes up to $5,000 of documented tips and overtime pay annually.
- Car-Loan Interest (Sec 702(b), new §163(r)): up to $500 interest on vehicle loans excluded from AGI.
Sec 703 – 'Trump Accounts' Pilot
- Pilot Program (Sec 703(a), new Chapter 72): $2B over FY26–30 for defined-contribution retirement plans for political staff
Sec 704 – Business Credits & Depreciation
- Full Expensing (Sec 704(a), §179): expensing cap $2.5M indexed, permanent.
- R&D Bonus Depreciation (Sec 704(b), §174): immediate expensing restored; amortization repeal.
- Advanced Manufacturing Credit (Sec 704(c), new §45X): $1B/year for semiconductors and battery components, FY26–35
Sec 705 – Clean-Energy Credit Phase-Out
- Renewable Electricity (Sec 705(a), §45): phases out by 5% annually, 0% by Jan 1, 2030.
- Electric Vehicle Credit (Sec 705(b), §30D): extends to used EVs with $3,000 cap; title-hold requirement 3 months.

2. Banking & Capital Markets (Title III)
Sec 301 – CFPB Funding Cap
- Spending Limit (Sec 301(a), new §1024(g)): caps CFPB discretionary budget at $1.2B (FY26 baseline).
Sec 302 – SEC Reserve Enhancement
- Reserve Transfer (Sec 302(a), new to §4 SEA): up to $250M/year from CFPB excess to Investor Protection Fund.
Sec 303 – DPA Reallocation
- Unused Loan Authority (Sec 303(a), DPA §101): $1B reprogrammed to Defense Production Reinvestment Fund.

3. Energy & Natural Resources (Title V)
Sec 501 – Outer Continental Shelf Leasing
- Lease Sale Mandate (Sec 501(a), OCSLA §18): five sales by Dec 31, 2026; 37.5% revenue-sharing.
Sec 502 – Coal Royalty Adjustment
- Royalty Rate (Sec 502(a), MLA §6): onshore coal rate 12.5% -> 15% effective Jan 1, 2027.
Sec 503 – Strategic Petroleum Reserve
- Authority Rescission (Sec 503(a)): rescinds 40% of unexpended drawdown (~$3B).
- Refill Infrastructure (Sec 503(b)): $500M for pipeline and port modernization, FY26–28.
Sec 504 – Hydropower Licensing
- License Fees (Sec 504(a), FPA §23): fee waiver for <10MW small hydro projects through 2030.
- Dredging Grants (Sec 504(b)): $300M for reservoir sediment removal, FY26–30.

4. Agriculture & Food (Title I)
Sec 101 – SNAP Rebase & Indexing
- Thrifty Food Plan (Sec 101(a), FNA §3): rebases Oct 1, 2025; ties adjustments to CPI-U.
Sec 102 – ABAWD Work Requirements
- Uniform Rule (Sec 102(a), §6(o)): 3-month limit per 36-month period.
- Waiver Criteria (Sec 102(b)): aligned waivers; AK/HI exempt through 2028.
Sec 103 – Elderly/Disabled Utility & Shelter
- Utility Allowance (Sec 103(a), §5(d)(2)): 10% increase.
- Internet Fees Prohibition (Sec 103(b)): bars internet as shelter expense.
Sec 104 – State Cost-Share & Admin Match
- Error-Rate Surcharge (Sec 104(a), new §16A): up to 15% surcharge on excess error costs.
- Administrative Funding (Sec 104(b)): federal match 75% from FY28.
Sec 105 – Commodity Programs
- PLC Reference Prices (Sec 105(a), §9019): corn +3%, soy +2%, wheat +2%; inflation cap 13%.
- Base Acre Expansion (Sec 105(b)): +30M acres through 2026.
- Election Lock-In (Sec 105(c)): locks 2025 elections through 2031; higher of PLC or ARC paid.

5. Healthcare & Labor (Title VIII)
Sec 801 – Higher Education Finance
- Pell Grants (Sec 801(a), HEA §401(b)): +$500 max award, FY26+.
- FAFSA Simplification (Sec 801(b)): IRS data-match; removes Asset Protection Allowance.
Sec 802 – PLUS Loan Limits
- Cap Increase (Sec 802(a), HEA §428B): cap raised to $15K/year, AY26–27.
Sec 803 – Workforce Development
- Sector Partnerships (Sec 803(a)): $2B, FY26–30; non-compete ban required.
- Apprenticeship Grants (Sec 803(b)): $200M, FY26–27.
Sec 804 – Health Workforce
- J-1 Visa Waivers (Sec 804(a)): accelerated for HPSA service.
- Community Health Centers (Sec 804(b)): $300M HRSA staffing grants, FY26–30.

6. Technology & Data (Title IX)
Sec 901 – OMB Data Modernization
- Modernization Fund: $100M for federal data platform.
Sec 402 – FAA Spectrum Auction (Title IV)
- 5GHz Safety Band: ~$5B proceeds; to AATF.
- Deployment Delay Waiver: 1-year equipment retrofit extensions.
Sec 403 – ATC Modernization
- NextGen Funding: $3B, FY26–30; 1,000 new controller trainees by FY27.

7. Defense & Security Contracting (Title II)
Sec 201 – Navy Shipbuilding
- Aircraft Carriers & Subs: $12B for 2 carriers; $8B for 5 subs, FY26.
Sec 203 – Munitions Replenishment
- $15B stockpile rebuild: LRASM, 155mm rounds.
Sec 209 – Border Security Tech
- Surveillance Systems: $3B sensors, towers, radar.
- Facility Construction: $1.5B for 20 centers by FY28.

8. Infrastructure & Construction (Title II & VI)
Sec 215 – MILCON Projects
- Barracks & Housing: $2.5B for 15 renovation projects, FY26–28.
- DoDEA Schools: $600M for 4 overseas campuses.
Sec 601 – STP Climate Funds Reallocation
- Bridge Repair Grants: $1.2B to Bridge Investment Program; min $50M/state.
"#;

/// Literal markers identifying the tax/finance title.
const TAX_SECTION_MARKERS: [&str; 2] = ["Tax & Finance", "Title VII"];

/// Splits a document into its blank-line-delimited sections.
pub fn sections(document: &str) -> impl Iterator<Item = &str> {
    document.split("\n\n")
}

/// Whether a section is the always-surfaced tax/finance title.
pub fn is_tax_section(section: &str) -> bool {
    TAX_SECTION_MARKERS
        .iter()
        .any(|marker| section.contains(marker))
}
