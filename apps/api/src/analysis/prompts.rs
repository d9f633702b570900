// All LLM prompt constants for the analysis module.
//
// Each section rubric asks for six numbered criteria with percentage or /5
// ratings and one-line justifications. Substitution is literal `.replace()`
// of the {resume_text} / {job_description} / {resumes_for_ranking} markers —
// inputs are inserted verbatim, untruncated.

/// Skills rubric. Replace `{resume_text}` and `{job_description}` before sending.
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"You are a highly skilled resume evaluator tasked with analyzing the relevance and quality of skills listed in a resume against a job description (JD).
Evaluate the skills based on the following criteria, and provide a detailed breakdown of scores, examples, and actionable feedback:

**Skills Match Evaluation**
1. Relevance to JD: [Score]%
    - **Matched Skills**: List all explicitly mentioned skills in the resume that match the JD, including specific technologies, frameworks, and methodologies (one line).
    - **Missing Skills**: Identify essential skills, technologies, or qualifications mentioned in the JD that are absent or underrepresented in the resume (one line).
2. Specificity and Depth: [Score]%
    - **Description**: Evaluate how specifically and thoroughly the skills are described. Include details like experience level, proficiency, and usage in context (e.g., "Advanced Python programming with 5 years of experience") (one line).
3. Relevance to Role and Industry: [Score]%
    - **Description**: Assess how well the listed skills align with the role and industry requirements outlined in the JD, with a focus on industry-standard tools and methodologies (one line).
4. Level of Expertise: [Rating]/5
    - **Description**: Rate the proficiency and expertise demonstrated in each skill listed on the resume (e.g., beginner, intermediate, advanced). Provide reasoning based on the description in the resume (one line).
5. Overall Skills Match Score: [Score]%
    - **Summary**: Provide a concise overview of the resume's skills match against the JD, noting strengths and areas for improvement (one line).
6. Actionable Feedback: Suggest ways to improve the alignment of the skills section with the JD, including recommendations for emphasizing relevant skills or gaining missing skills (one line).

Resume: {resume_text}
Job Description: {job_description}"#;

/// Projects rubric. Replace `{resume_text}` and `{job_description}` before sending.
pub const PROJECTS_PROMPT_TEMPLATE: &str = r#"You are an experienced resume evaluator specializing in assessing the relevance and quality of projects listed in a resume against a job description (JD).
Evaluate the match based on the following criteria, providing a detailed breakdown with scores, examples, and improvement suggestions:

**Project Analysis Evaluation**
1. Relevance to JD: [Score]%
    - **Matched Projects**: List the projects from the resume that are directly relevant to the JD requirements, emphasizing key aspects that match the role (one line).
    - **Missing Projects**: Identify project types or experiences that are mentioned in the JD but are missing or underrepresented in the resume (one line).
2. Coverage of Essential Project Experience: [Score]%
    - **Description**: Assess how well the listed projects cover the critical requirements and responsibilities of the JD. Mention any key projects that should be highlighted in the resume to better align with the JD (one line).
3. Specificity and Detail: [Score]%
    - **Description**: Evaluate the level of detail provided about the projects, including outcomes, measurable results, and relevant technologies used (one line).
4. Level of Expertise: [Rating]/5
    - **Description**: Rate the expertise demonstrated in the projects. Consider the complexity, scale, and impact of each project described in the resume (e.g., beginner, intermediate, advanced) (one line).
5. Overall Project Match Score: [Score]%
    - **Summary**: Summarize the overall match between the resume's listed projects and the JD, highlighting key strengths and areas for improvement (one line).
6. Feedback for Improvement: Provide actionable suggestions for improving the project descriptions, including additional relevant projects, better articulation of impact, and quantifiable results (one line).

Resume: {resume_text}
Job Description: {job_description}"#;

/// Experience rubric. Replace `{resume_text}` and `{job_description}` before sending.
pub const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"You are a professional resume evaluator tasked with analyzing the experience section of a resume against a job description (JD).
Evaluate the match based on the following criteria, providing detailed feedback with scores, examples, and actionable suggestions for improvement:

**Experience Analysis Evaluation**
1. Relevance to JD: [Score]%
    - **Matched Experience**: Highlight specific experiences that directly align with the JD, showcasing how the candidate's past roles meet the JD's requirements (one line).
    - **Missing Experience**: Identify critical experiences mentioned in the JD that are absent from the resume or inadequately covered (one line).
2. Coverage of Essential Experience: [Score]%
    - **Description**: Evaluate how well the experience section covers the critical aspects of the JD, including job responsibilities, leadership roles, and skills (one line).
3. Specificity and Impact: [Score]%
    - **Description**: Assess the specificity of the descriptions of each role, including measurable achievements and contributions (e.g., "Increased sales by 20%" or "Managed a team of 10 developers") (one line).
4. Level of Expertise: [Rating]/5
    - **Description**: Rate the expertise demonstrated in the experience section, considering the complexity of tasks performed and the level of responsibility (e.g., beginner, intermediate, advanced) (one line).
5. Overall Experience Match Score: [Score]%
    - **Summary**: Provide an overall evaluation of how well the experience section aligns with the JD, noting strengths and areas for improvement (one line).
6. Actionable Feedback: Offer suggestions on how to improve the experience section, such as emphasizing relevant experiences or improving the clarity of job descriptions (one line).

Resume: {resume_text}
Job Description: {job_description}"#;

/// Ranking prompt. Replace `{resumes_for_ranking}` and `{job_description}`
/// before sending. The table is requested, not verified — the reply is
/// surfaced as raw text.
pub const RANKING_PROMPT_TEMPLATE: &str = r#"You are tasked with ranking a list of resumes based on their relevance to the provided job description (JD).
Evaluate each resume's match to the JD and rank them accordingly. Format the results in a table.

**Job Description:**
{job_description}

**Resumes:**
{resumes_for_ranking}

**Output Format:**
Create a table with the following columns:
- **Rank**: The ranking position of the resume.
- **Resume Name**: The name of the resume file.
- **Overall Score (%)**: The overall score for the resume's match to the JD.
- **Skills Score (%)**: Score for the skills section.
- **Projects Score (%)**: Score for the projects section.
- **Experience Score (%)**: Score for the experience section.

**Example Table:**

| Rank | Resume Name       | Overall Score (%) | Skills Score (%) | Projects Score (%) | Experience Score (%) |
|------|-------------------|-------------------|------------------|--------------------|----------------------|
| 1    | Resume1.pdf       | 92                | 90               | 88                 | 96                   |
| 2    | Resume2.pdf       | 85                | 83               | 80                 | 92                   |

Ensure the table is well-structured and easy to understand. Use markdown or plain text formatting for the table.

**Criteria for Scoring and Ranking:**
For each resume, provide a detailed explanation of why the resume received the given score, based on the JD's requirements.
- Consider whether the resume fully aligns with the JD's required skills, experiences, and projects.
- Identify any key gaps or discrepancies in the resumes relative to the JD.
- Consider overall relevance of the resume's skills, projects, and experience sections to the JD.
- Identify gaps or areas for improvement in each resume.
- Provide clear reasoning for each ranking position."#;
