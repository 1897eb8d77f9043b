use yew::prelude::*;
use chrono::{Datelike, Local};

use crate::components::accordion::FaqSection;
use crate::components::icons::arrow_down;
use crate::components::reveal::FadeIn;
use crate::config;
use crate::content;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let year = Local::now().year();

    html! {
        <div class="landing-page">
            // Bloco 1: Hero
            <section id="hero" class="hero-section">
                <div class="hero-backdrop"></div>
                <div class="hero-content">
                    <FadeIn>
                        <span class="hero-badge">{"Terapia Profunda & Consciência"}</span>
                    </FadeIn>
                    <FadeIn delay_ms={100}>
                        <h1 class="hero-title">
                            {"Seu corpo está gritando o "}
                            <span class="hero-title-accent">{"que sua boca calou?"}</span>
                        </h1>
                    </FadeIn>
                    <FadeIn delay_ms={200}>
                        <p class="hero-subtitle">
                            {"Eu ajudo você a curar "}
                            <span class="hero-pill">{"traumas antigos e dores físicas"}</span>
                            {" de origem emocional através de um processo profundo de consciência e responsabilidade."}
                        </p>
                    </FadeIn>
                    <FadeIn delay_ms={400}>
                        <a href="#identificacao" class="primary-button">
                            {"Iniciar Meu Processo de Cura"}
                            { arrow_down() }
                        </a>
                    </FadeIn>
                </div>
                <div class="scroll-hint">
                    <span>{"Deslize"}</span>
                    <div class="scroll-hint-line"></div>
                </div>
            </section>

            // Bloco 2: Identificação
            <section id="identificacao" class="symptoms-section">
                <div class="section-inner">
                    <FadeIn>
                        <h2 class="section-title">
                            {"Você tem se sentido "}
                            <em class="title-accent">{"refém"}</em>
                            {" do próprio corpo?"}
                        </h2>
                    </FadeIn>
                    <div class="card-grid">
                        {
                            for content::symptom_cards().into_iter().enumerate().map(|(i, card)| {
                                html! {
                                    <FadeIn delay_ms={i as u32 * 100}>
                                        <div class="symptom-card">
                                            <div class="card-icon">{ card.icon.render() }</div>
                                            <h3>{ card.title }</h3>
                                            <p>{ card.description }</p>
                                        </div>
                                    </FadeIn>
                                }
                            })
                        }
                    </div>
                    <FadeIn delay_ms={400}>
                        <div class="section-cta">
                            <a href="#video" class="outline-button">
                                {"Entenda como posso ajudar"}
                                { arrow_down() }
                            </a>
                        </div>
                    </FadeIn>
                </div>
            </section>

            // Bloco 3: Vídeo
            <section id="video" class="video-section">
                <div class="section-inner narrow">
                    <FadeIn>
                        <h2 class="section-title">
                            {"Veja como o meu método pode "}
                            <em class="title-accent">{"transformar a sua vida."}</em>
                        </h2>
                    </FadeIn>
                    <FadeIn delay_ms={200}>
                        <div class="video-frame">
                            <iframe
                                src={config::VIDEO_EMBED_URL}
                                title="Vídeo de Apresentação"
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                                allowfullscreen=true
                            ></iframe>
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={300}>
                        <div class="section-cta">
                            <a href="#sobre" class="outline-button">
                                {"Conheça minha jornada"}
                                { arrow_down() }
                            </a>
                        </div>
                    </FadeIn>
                </div>
            </section>

            // Bloco 4: A Especialista
            <section id="sobre" class="about-section">
                <div class="section-inner about-grid">
                    <FadeIn delay_ms={100}>
                        <div class="portrait-frame">
                            <img src="https://i.imgur.com/2ZRcIqB.jpeg" alt="Marcia Alves" />
                        </div>
                    </FadeIn>
                    <div>
                        <FadeIn>
                            <h2 class="section-title left">
                                {"Muito prazer, sou "}
                                <span class="name-accent">{"Marcia Alves"}</span>
                                {"."}
                            </h2>
                            <h3 class="about-lead">
                                {"Eu não li sobre a sua dor em livros. "}
                                <em class="title-accent">{"Eu a senti na pele."}</em>
                            </h3>
                        </FadeIn>
                        <FadeIn delay_ms={200}>
                            <div class="about-copy">
                                <p>
                                    {"Meu primeiro sonho foi o Direito. Eu buscava segurança, respeito e independência. Mas quando esse caminho se fechou, meu "}
                                    <span class="highlight">{"corpo começou a cobrar o preço"}</span>
                                    {" da frustração."}
                                </p>
                                <p>
                                    {"Fui diagnosticada com "}
                                    <strong>{"Fibromialgia"}</strong>
                                    {". A dor era constante, aguda e invisível aos olhos dos médicos. Foi no processo terapêutico profundo que entendi: "}
                                    <em class="accent">{"meu corpo manifestava fisicamente os traumas que eu não havia processado"}</em>
                                    {"."}
                                </p>
                                <p>
                                    {"Hoje, minha missão é oferecer a escuta que eu recebi: aquela que "}
                                    <span class="underlined">{"olha além do sintoma"}</span>
                                    {" e encontra a verdade emocional que está paralisando você."}
                                </p>
                            </div>
                        </FadeIn>
                        <FadeIn delay_ms={400}>
                            <a href="#metodologia" class="outline-button">
                                {"Ver meu método de trabalho"}
                                { arrow_down() }
                            </a>
                        </FadeIn>
                    </div>
                </div>
            </section>

            // Bloco 5: A Metodologia
            <section id="metodologia" class="method-section">
                <div class="section-inner">
                    <FadeIn>
                        <h2 class="section-title dark">
                            {"Uma abordagem "}
                            <span class="gradient-accent">{"técnica, humana e profunda."}</span>
                        </h2>
                    </FadeIn>
                    <div class="method-grid">
                        {
                            for content::method_steps().into_iter().enumerate().map(|(i, step)| {
                                html! {
                                    <FadeIn delay_ms={i as u32 * 200}>
                                        <div class="method-step">
                                            <span class="step-number">{ step.number }{"."}</span>
                                            <h3>{ step.title }</h3>
                                            <p>{ step.description }</p>
                                        </div>
                                    </FadeIn>
                                }
                            })
                        }
                    </div>
                    <FadeIn delay_ms={600}>
                        <div class="section-cta">
                            <a href="#depoimentos" class="outline-button inverted">
                                {"Veja os resultados"}
                                { arrow_down() }
                            </a>
                        </div>
                    </FadeIn>
                </div>
            </section>

            // Bloco 6: Prova Social
            <section id="depoimentos" class="testimonials-section">
                <div class="section-inner">
                    <FadeIn>
                        <h2 class="section-title">
                            {"O que dizem quem decidiu "}
                            <em class="title-accent">{"enfrentar o processo."}</em>
                        </h2>
                    </FadeIn>
                    <div class="testimonial-grid">
                        {
                            for content::testimonials().into_iter().enumerate().map(|(i, item)| {
                                html! {
                                    <FadeIn delay_ms={i as u32 * 100}>
                                        <div class="testimonial-card">
                                            <span class="quote-mark">{"\u{201C}"}</span>
                                            <p class="testimonial-quote">
                                                {"\u{201C}"}{ item.quote }{"\u{201D}"}
                                            </p>
                                            <div class="testimonial-author">
                                                <p class="author-name">{ item.author }</p>
                                                <p class="author-focus">{ item.focus }</p>
                                            </div>
                                        </div>
                                    </FadeIn>
                                }
                            })
                        }
                    </div>
                    <FadeIn delay_ms={400}>
                        <div class="section-cta">
                            <a href="#faq" class="outline-button">
                                {"Dúvidas Frequentes"}
                                { arrow_down() }
                            </a>
                        </div>
                    </FadeIn>
                </div>
            </section>

            // Bloco 7: FAQ
            <section id="faq" class="faq-section">
                <div class="section-inner narrow">
                    <FadeIn>
                        <h2 class="section-title">
                            {"Perguntas "}
                            <em class="title-accent">{"Frequentes"}</em>
                        </h2>
                    </FadeIn>
                    <FaqSection />
                    <FadeIn delay_ms={200}>
                        <div class="section-cta">
                            <a href="#contato" class="outline-button">
                                {"Pronta para começar?"}
                                { arrow_down() }
                            </a>
                        </div>
                    </FadeIn>
                </div>
            </section>

            // Bloco 8: Fechamento
            <section id="contato" class="closing-section">
                <div class="section-inner">
                    <FadeIn>
                        <h2 class="closing-title">
                            {"A cura começa quando você "}
                            <span class="gradient-accent">{"decide parar de fugir."}</span>
                        </h2>
                    </FadeIn>
                    <FadeIn delay_ms={200}>
                        <p class="closing-copy">
                            {"Se você está pronta para se comprometer com a sua libertação e não aceita mais "}
                            <span class="hero-pill">{"viver como refém da dor"}</span>
                            {", preencha sua aplicação agora."}
                        </p>
                    </FadeIn>
                    <FadeIn delay_ms={400}>
                        <a
                            href={config::whatsapp_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="primary-button large"
                        >
                            {"Solicitar Minha Sessão de Alinhamento"}
                        </a>
                    </FadeIn>
                </div>
            </section>

            <footer class="site-footer">
                <p>{format!("© {} Marcia Alves - Terapia Profunda. Todos os direitos reservados.", year)}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #f8fafc;
                    color: #0f172a;
                    font-family: 'Helvetica Neue', Arial, sans-serif;
                }

                .landing-page section {
                    scroll-margin-top: 2rem;
                }

                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    position: relative;
                    z-index: 1;
                }

                .section-inner.narrow {
                    max-width: 760px;
                }

                .section-title {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: clamp(2.2rem, 5vw, 3.5rem);
                    font-weight: 500;
                    text-align: center;
                    letter-spacing: -0.02em;
                    margin-bottom: 5rem;
                }

                .section-title.left {
                    text-align: left;
                    margin-bottom: 1.5rem;
                }

                .section-title.dark {
                    color: #fff;
                    font-weight: 300;
                }

                .title-accent {
                    color: #0284c7;
                    font-weight: 300;
                }

                .name-accent {
                    color: #0369a1;
                    font-weight: 600;
                }

                .gradient-accent {
                    background: linear-gradient(90deg, #38bdf8, #bae6fd);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    font-style: italic;
                }

                .highlight {
                    background: #e0f2fe;
                    color: #075985;
                    padding: 0 0.3rem;
                    border-radius: 4px;
                    font-weight: 500;
                }

                .underlined {
                    font-style: normal;
                    text-decoration: underline;
                    text-decoration-color: #bae6fd;
                    text-decoration-thickness: 2px;
                    text-underline-offset: 3px;
                }

                .accent {
                    color: #0284c7;
                    font-style: normal;
                    font-weight: 500;
                }

                .accent-box {
                    background: rgba(12, 74, 110, 0.5);
                    border: 1px solid rgba(3, 105, 161, 0.5);
                    border-radius: 4px;
                    padding: 0.1rem 0.4rem;
                    color: #bae6fd;
                    white-space: nowrap;
                }

                /* Scroll reveal */
                .fade-in {
                    opacity: 0;
                    transform: translateY(40px);
                    transition:
                        opacity 1s cubic-bezier(0.16, 1, 0.3, 1),
                        transform 1s cubic-bezier(0.16, 1, 0.3, 1);
                }

                .fade-in.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                /* Hero */
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 1.5rem;
                    background: #020617;
                    overflow: hidden;
                }

                .hero-backdrop {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background-image:
                        radial-gradient(circle at center, rgba(56, 189, 248, 0.08) 0%, transparent 100%),
                        linear-gradient(135deg, rgba(2, 6, 23, 0.95), rgba(15, 23, 42, 0.9)),
                        url('https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?q=80&w=2000&auto=format&fit=crop');
                    background-size: cover;
                    background-position: center;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 900px;
                    margin: 3rem auto 0;
                    text-align: center;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    margin-bottom: 2.5rem;
                    border-radius: 999px;
                    background: rgba(14, 165, 233, 0.1);
                    border: 1px solid rgba(56, 189, 248, 0.2);
                    color: #7dd3fc;
                    font-size: 0.75rem;
                    font-weight: 600;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                }

                .hero-title {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 500;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                    color: #fff;
                    margin-bottom: 2rem;
                }

                .hero-title-accent {
                    background: linear-gradient(90deg, #38bdf8, #bae6fd);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    font-style: italic;
                    font-weight: 300;
                }

                .hero-subtitle {
                    font-size: clamp(1.1rem, 2.5vw, 1.5rem);
                    font-weight: 300;
                    line-height: 1.7;
                    color: rgba(224, 242, 254, 0.7);
                    max-width: 720px;
                    margin: 0 auto 4rem;
                }

                .hero-pill {
                    display: inline-block;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 6px;
                    padding: 0.1rem 0.5rem;
                    color: #fff;
                    font-weight: 500;
                }

                .primary-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    background: #fff;
                    color: #020617;
                    padding: 1.25rem 2.5rem;
                    border-radius: 999px;
                    font-size: 0.9rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    text-decoration: none;
                    box-shadow: 0 0 40px rgba(14, 165, 233, 0.3);
                    transition: transform 0.3s ease, background 0.3s ease;
                }

                .primary-button:hover {
                    background: #f0f9ff;
                    transform: scale(1.05);
                }

                .primary-button.large {
                    padding: 1.5rem 3.5rem;
                    margin-top: 2rem;
                }

                .scroll-hint {
                    position: absolute;
                    bottom: 3rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    opacity: 0.6;
                    animation: bounce 2s infinite;
                    z-index: 1;
                }

                .scroll-hint span {
                    color: #7dd3fc;
                    font-size: 0.7rem;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    margin-bottom: 0.75rem;
                }

                .scroll-hint-line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, #38bdf8, transparent);
                }

                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, -10px); }
                }

                /* Shared buttons */
                .outline-button {
                    display: inline-flex;
                    align-items: center;
                    padding: 1rem 2rem;
                    border: 1px solid rgba(148, 163, 184, 0.4);
                    border-radius: 999px;
                    background: #fff;
                    color: #334155;
                    font-size: 0.8rem;
                    font-weight: 600;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    text-decoration: none;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    transition: all 0.3s ease;
                }

                .outline-button:hover {
                    border-color: #38bdf8;
                    color: #0369a1;
                    box-shadow: 0 8px 30px rgba(14, 165, 233, 0.12);
                }

                .outline-button.inverted {
                    background: transparent;
                    border-color: rgba(14, 165, 233, 0.3);
                    color: #7dd3fc;
                }

                .outline-button.inverted:hover {
                    background: rgba(12, 74, 110, 0.4);
                    border-color: #38bdf8;
                }

                .button-arrow {
                    width: 1rem;
                    height: 1rem;
                    margin-left: 0.75rem;
                    transition: transform 0.3s ease;
                }

                .outline-button:hover .button-arrow,
                .primary-button:hover .button-arrow {
                    transform: translateY(4px);
                }

                .primary-button .button-arrow {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .section-cta {
                    text-align: center;
                }

                /* Identificação */
                .symptoms-section {
                    padding: 8rem 0;
                    background: #fff;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    margin-bottom: 5rem;
                }

                .symptom-card {
                    height: 100%;
                    padding: 3rem;
                    border-radius: 2rem;
                    background: #f8fafc;
                    border: 1px solid rgba(226, 232, 240, 0.8);
                    transition: all 0.5s ease;
                }

                .symptom-card:hover {
                    background: #fff;
                    box-shadow: 0 20px 40px -15px rgba(14, 165, 233, 0.15);
                }

                .card-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    background: #e0f2fe;
                    color: #0284c7;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                    transition: all 0.5s ease;
                }

                .symptom-card:hover .card-icon {
                    background: #0ea5e9;
                    color: #fff;
                    transform: scale(1.1);
                }

                .card-icon-svg {
                    width: 2rem;
                    height: 2rem;
                }

                .symptom-card h3 {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: 1.5rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }

                .symptom-card p {
                    color: #475569;
                    font-weight: 300;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }

                /* Vídeo */
                .video-section {
                    padding: 8rem 0;
                    background: #f8fafc;
                    border-top: 1px solid #f1f5f9;
                    border-bottom: 1px solid #f1f5f9;
                }

                .video-frame {
                    aspect-ratio: 9 / 16;
                    max-width: 380px;
                    margin: 0 auto 4rem;
                    border-radius: 2.5rem;
                    overflow: hidden;
                    background: #020617;
                    box-shadow: 0 30px 60px -15px rgba(14, 165, 233, 0.3);
                    border: 8px solid #fff;
                }

                .video-frame iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }

                /* Sobre */
                .about-section {
                    padding: 8rem 0;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .portrait-frame {
                    aspect-ratio: 3 / 4;
                    border-radius: 2.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .portrait-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 1s ease;
                }

                .portrait-frame:hover img {
                    transform: scale(1.05);
                }

                .about-lead {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: 1.6rem;
                    font-weight: 500;
                    color: #334155;
                    line-height: 1.5;
                    margin-bottom: 2.5rem;
                }

                .about-copy p {
                    color: #475569;
                    font-weight: 300;
                    font-size: 1.1rem;
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                }

                .about-copy {
                    margin-bottom: 3rem;
                }

                /* Metodologia */
                .method-section {
                    padding: 8rem 0;
                    background: #020617;
                    color: #fff;
                }

                .method-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    margin-bottom: 5rem;
                    text-align: left;
                }

                .method-step {
                    height: 100%;
                    border-top: 1px solid rgba(7, 89, 133, 0.5);
                    padding-top: 2.5rem;
                    transition: border-color 0.5s ease;
                }

                .method-step:hover {
                    border-color: #38bdf8;
                }

                .step-number {
                    display: block;
                    font-family: monospace;
                    font-size: 1.25rem;
                    color: #38bdf8;
                    opacity: 0.8;
                    margin-bottom: 1.5rem;
                }

                .method-step h3 {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: 1.5rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }

                .method-step p {
                    color: #94a3b8;
                    font-weight: 300;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }

                /* Depoimentos */
                .testimonials-section {
                    padding: 8rem 0;
                    background: #f8fafc;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 5rem;
                }

                .testimonial-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    background: #fff;
                    padding: 3rem;
                    border-radius: 2rem;
                    border: 1px solid #f1f5f9;
                    box-shadow: 0 10px 40px -15px rgba(0, 0, 0, 0.05);
                    transition: transform 0.5s ease;
                }

                .testimonial-card:hover {
                    transform: translateY(-8px);
                }

                .quote-mark {
                    position: absolute;
                    top: 2rem;
                    left: 2rem;
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: 4.5rem;
                    line-height: 1;
                    color: #f0f9ff;
                }

                .testimonial-quote {
                    position: relative;
                    z-index: 1;
                    flex-grow: 1;
                    color: #475569;
                    font-style: italic;
                    font-weight: 300;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    margin-bottom: 3rem;
                }

                .testimonial-author {
                    border-top: 1px solid #f1f5f9;
                    padding-top: 1.5rem;
                }

                .author-name {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-weight: 500;
                    font-size: 1.1rem;
                }

                .author-focus {
                    margin-top: 0.5rem;
                    font-size: 0.7rem;
                    font-weight: 600;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: #0284c7;
                }

                /* FAQ */
                .faq-section {
                    padding: 8rem 0;
                    background: #fff;
                }

                .faq-list {
                    margin-bottom: 5rem;
                    text-align: left;
                }

                .faq-item {
                    background: rgba(248, 250, 252, 0.5);
                    border: 1px solid rgba(226, 232, 240, 0.6);
                    border-radius: 1rem;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: #bae6fd;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem 2rem;
                    background: none;
                    border: none;
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: 1.25rem;
                    color: #1e293b;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: color 0.3s ease;
                }

                .faq-question:hover {
                    color: #0369a1;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #0ea5e9;
                    flex-shrink: 0;
                    margin-left: 2rem;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    padding: 0 2rem;
                    transition:
                        max-height 0.3s ease-in-out,
                        opacity 0.3s ease-in-out,
                        padding 0.3s ease-in-out;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    opacity: 1;
                    padding: 0.5rem 2rem 2rem;
                }

                .faq-answer p {
                    color: #475569;
                    font-weight: 300;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }

                /* Fechamento */
                .closing-section {
                    padding: 10rem 0;
                    background: #020617;
                    background-image: radial-gradient(circle at bottom, rgba(14, 165, 233, 0.15) 0%, transparent 100%);
                    text-align: center;
                }

                .closing-title {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: clamp(2.8rem, 7vw, 5.5rem);
                    font-weight: 500;
                    line-height: 1.15;
                    letter-spacing: -0.02em;
                    color: #fff;
                    margin-bottom: 2.5rem;
                }

                .closing-copy {
                    font-size: clamp(1.2rem, 2.5vw, 1.5rem);
                    font-weight: 300;
                    line-height: 1.7;
                    color: rgba(224, 242, 254, 0.7);
                    max-width: 640px;
                    margin: 0 auto 4rem;
                }

                /* Footer */
                .site-footer {
                    padding: 3rem 1.5rem;
                    background: #020617;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    text-align: center;
                }

                .site-footer p {
                    color: #64748b;
                    font-size: 0.85rem;
                    font-weight: 300;
                }

                @media (max-width: 768px) {
                    .card-grid,
                    .method-grid,
                    .testimonial-grid,
                    .about-grid {
                        grid-template-columns: 1fr;
                    }

                    .symptom-card,
                    .testimonial-card {
                        padding: 2rem;
                    }

                    .section-title {
                        margin-bottom: 3rem;
                    }

                    .symptoms-section,
                    .video-section,
                    .about-section,
                    .method-section,
                    .testimonials-section,
                    .faq-section {
                        padding: 5rem 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
