use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>🌸 Flower Classification &amp; Q&amp;A</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(160deg, #fdf2f8 0%, #ede9fe 100%);
            min-height: 100vh;
            padding: 30px 20px;
        }

        .wrap { max-width: 720px; margin: 0 auto; }

        h1 { color: #86198f; margin-bottom: 6px; }

        .tagline { color: #6b7280; margin-bottom: 24px; }

        .uploader {
            background: white;
            border: 2px dashed #d8b4fe;
            border-radius: 14px;
            padding: 36px 20px;
            text-align: center;
            cursor: pointer;
        }

        .uploader:hover { border-color: #a855f7; background: #faf5ff; }

        .uploader p { color: #7e22ce; font-weight: 600; }

        .uploader small { color: #9ca3af; }

        input[type="file"] { display: none; }

        .card {
            background: white;
            border-radius: 14px;
            box-shadow: 0 4px 14px rgba(134, 25, 143, 0.08);
            margin-top: 24px;
            padding: 20px;
        }

        .card img {
            max-width: 100%;
            border-radius: 10px;
            margin-bottom: 14px;
        }

        .filename { color: #6b7280; font-size: 0.85em; margin-bottom: 10px; }

        .banner {
            background: #f0fdf4;
            border: 1px solid #bbf7d0;
            color: #166534;
            border-radius: 8px;
            padding: 12px;
            font-weight: 600;
        }

        .advisory {
            background: #fffbeb;
            border: 1px solid #fde68a;
            color: #92400e;
            border-radius: 8px;
            padding: 12px;
        }

        .failure {
            background: #fef2f2;
            border: 1px solid #fecaca;
            color: #991b1b;
            border-radius: 8px;
            padding: 12px;
        }

        details {
            margin-top: 14px;
            border: 1px solid #e5e7eb;
            border-radius: 8px;
            padding: 10px 12px;
        }

        details summary { cursor: pointer; color: #7e22ce; font-weight: 600; }

        details p { margin-top: 10px; color: #374151; line-height: 1.55; }

        .qa { margin-top: 14px; }

        .qa label { display: block; color: #374151; font-weight: 600; margin-bottom: 6px; }

        .qa input {
            width: 100%;
            border: 1px solid #d1d5db;
            border-radius: 8px;
            padding: 10px;
            font-size: 1em;
        }

        .qa button {
            margin-top: 8px;
            background: #a855f7;
            color: white;
            border: none;
            border-radius: 8px;
            padding: 10px 18px;
            font-size: 1em;
            cursor: pointer;
        }

        .qa button:disabled { background: #d8b4fe; cursor: wait; }

        .answer {
            margin-top: 10px;
            background: #eff6ff;
            border: 1px solid #bfdbfe;
            color: #1e3a8a;
            border-radius: 8px;
            padding: 12px;
            line-height: 1.55;
            display: none;
        }

        .status { color: #6b7280; margin-top: 10px; }
    </style>
</head>
<body>
    <div class="wrap">
        <h1>🌸 Flower Classification &amp; Q&amp;A</h1>
        <p class="tagline">Upload flower images to identify them and learn more!</p>

        <div class="uploader" id="uploader">
            <p>📷 Click to choose flower images</p>
            <small>JPEG, PNG or WEBP — multiple files welcome</small>
            <input type="file" id="fileInput" accept="image/jpeg,image/png,image/webp" multiple>
        </div>

        <div id="cards"></div>
    </div>

    <script>
        const uploader = document.getElementById('uploader');
        const fileInput = document.getElementById('fileInput');
        const cards = document.getElementById('cards');

        uploader.addEventListener('click', () => fileInput.click());

        fileInput.addEventListener('change', async (e) => {
            const files = [...e.target.files];
            for (const [idx, file] of files.entries()) {
                await processFile(file, idx);
            }
            fileInput.value = '';
        });

        async function processFile(file, idx) {
            const card = document.createElement('div');
            card.className = 'card';

            const img = document.createElement('img');
            img.src = URL.createObjectURL(file);
            card.appendChild(img);

            const name = document.createElement('div');
            name.className = 'filename';
            name.textContent = '📷 ' + file.name;
            card.appendChild(name);

            const status = document.createElement('div');
            status.className = 'status';
            status.textContent = '🔍 Analyzing image...';
            card.appendChild(status);

            cards.appendChild(card);

            const form = new FormData();
            form.append('image', file);

            let data;
            try {
                const res = await fetch('/api/identify', { method: 'POST', body: form });
                data = await res.json();
            } catch (err) {
                status.remove();
                showMessage(card, 'failure', '❌ ' + err.message);
                return;
            }
            status.remove();

            if (data.status === 'error') {
                showMessage(card, 'failure', '❌ ' + data.message);
            } else if (data.status === 'no_predictions') {
                showMessage(card, 'advisory', '⚠️ ' + data.message);
            } else {
                showMessage(card, 'banner', data.banner);
                appendExplanation(card, data.explanation);
                appendQuestionForm(card, data.label, idx, file.name);
            }
        }

        function showMessage(card, kind, text) {
            const div = document.createElement('div');
            div.className = kind;
            div.textContent = text;
            card.appendChild(div);
        }

        function appendExplanation(card, text) {
            const details = document.createElement('details');
            details.open = true;
            const summary = document.createElement('summary');
            summary.textContent = '🌿 Learn about this flower';
            const body = document.createElement('p');
            body.textContent = text;
            details.appendChild(summary);
            details.appendChild(body);
            card.appendChild(details);
        }

        function appendQuestionForm(card, label, idx, filename) {
            const qa = document.createElement('div');
            qa.className = 'qa';

            const prompt = document.createElement('label');
            prompt.textContent = '💬 Ask about ' + label;
            qa.appendChild(prompt);

            const input = document.createElement('input');
            input.type = 'text';
            input.id = 'question-' + idx + '-' + filename;
            input.placeholder = 'e.g., How often should I water it?';
            qa.appendChild(input);

            const button = document.createElement('button');
            button.textContent = 'Ask';
            qa.appendChild(button);

            const answer = document.createElement('div');
            answer.className = 'answer';
            qa.appendChild(answer);

            button.addEventListener('click', async () => {
                const question = input.value.trim();
                if (!question) return;
                button.disabled = true;
                button.textContent = '🤔 Thinking...';
                try {
                    const res = await fetch('/api/ask', {
                        method: 'POST',
                        headers: { 'Content-Type': 'application/json' },
                        body: JSON.stringify({ label, question })
                    });
                    const data = await res.json();
                    answer.textContent = '🤖 ' + data.answer;
                } catch (err) {
                    answer.textContent = '❌ ' + err.message;
                }
                answer.style.display = 'block';
                button.disabled = false;
                button.textContent = 'Ask';
            });

            card.appendChild(qa);
        }
    </script>
</body>
</html>
"#;
