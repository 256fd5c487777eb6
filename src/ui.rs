/// The single page: sidebar with language, scenario and past descriptions;
/// main panel with uploader, preview and result.
pub const INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>🌍 Landmark Explorer</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: #f4f6fb;
            min-height: 100vh;
            display: flex;
            color: #2c3e50;
        }

        .sidebar {
            width: 300px;
            min-height: 100vh;
            background: #ffffff;
            border-right: 1px solid #e3e6ef;
            padding: 30px 20px;
        }

        .sidebar h2 {
            font-size: 1.3em;
            margin-bottom: 25px;
        }

        .sidebar label {
            display: block;
            font-size: 0.9em;
            font-weight: 600;
            margin-bottom: 8px;
        }

        .sidebar select {
            width: 100%;
            padding: 8px;
            border-radius: 8px;
            border: 1px solid #ccd;
            font-size: 0.95em;
        }

        .sidebar hr {
            border: none;
            border-top: 1px solid #e3e6ef;
            margin: 25px 0;
        }

        .history-item {
            font-size: 0.85em;
            line-height: 1.5;
            margin-bottom: 12px;
            word-wrap: break-word;
        }

        .history-empty {
            color: #999;
            font-size: 0.9em;
        }

        .main {
            flex: 1;
            display: flex;
            justify-content: center;
            padding: 40px 20px;
        }

        .container {
            max-width: 760px;
            width: 100%;
        }

        .header {
            text-align: center;
            margin-bottom: 30px;
        }

        .header p {
            font-size: 18px;
            color: #555;
            margin-top: 10px;
        }

        .upload-area {
            border: 3px dashed #4a6fa5;
            border-radius: 15px;
            padding: 50px 20px;
            text-align: center;
            cursor: pointer;
            background: #f8f9ff;
        }

        .upload-area.dragover {
            border-color: #2c3e50;
            background: #e8ebff;
        }

        .upload-icon {
            font-size: 3em;
            margin-bottom: 15px;
        }

        .upload-hint {
            color: #999;
            font-size: 0.9em;
            margin-top: 8px;
        }

        input[type="file"] {
            display: none;
        }

        .info {
            background: #eef4ff;
            border-radius: 10px;
            padding: 15px;
            margin-top: 20px;
            color: #4a6fa5;
        }

        .preview {
            display: none;
            justify-content: center;
            margin: 20px 0;
        }

        .preview img {
            max-height: 300px;
            border-radius: 12px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.2);
        }

        button {
            background: #4a6fa5;
            color: white;
            border: none;
            border-radius: 8px;
            padding: 12px 24px;
            font-size: 1em;
            cursor: pointer;
        }

        button:disabled {
            opacity: 0.6;
            cursor: wait;
        }

        .actions {
            text-align: center;
            display: none;
        }

        .loading {
            text-align: center;
            padding: 30px;
            display: none;
        }

        .spinner {
            border: 4px solid #f3f3f3;
            border-top: 4px solid #4a6fa5;
            border-radius: 50%;
            width: 40px;
            height: 40px;
            animation: spin 1s linear infinite;
            margin: 0 auto 15px;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .success {
            background: #e9f8ee;
            color: #1e7e34;
            border-radius: 10px;
            padding: 12px 15px;
            margin-top: 20px;
        }

        .result {
            display: none;
            margin-top: 20px;
        }

        .result h3 {
            margin: 20px 0 10px;
        }

        .result-text {
            max-width: 700px;
            margin: auto;
            font-size: 17px;
            line-height: 1.6;
            text-align: left;
        }

        .result-text h1, .result-text h2, .result-text h3 {
            margin: 16px 0 8px;
        }

        .download {
            margin-top: 20px;
            text-align: center;
        }

        .error {
            background: #fee;
            border: 2px solid #fcc;
            color: #c33;
            padding: 15px;
            border-radius: 10px;
            margin-top: 20px;
            display: none;
        }
    </style>
</head>
<body>
    <aside class="sidebar">
        <h2>🧭 Explorer Panel</h2>

        <label for="language">🌐 Language</label>
        <select id="language"></select>

        <hr>

        <label for="scenario">🎯 Scenario</label>
        <select id="scenario"></select>

        <hr>

        <label>📜 Past Descriptions</label>
        <div id="history"><p class="history-empty">No history yet.</p></div>
    </aside>

    <main class="main">
        <div class="container">
            <div class="header">
                <h1>🗺️ Gemini Landmark Explorer</h1>
                <p>Upload a photo of a landmark, and let AI tell its story!</p>
            </div>

            <div class="upload-area" id="uploadArea">
                <div class="upload-icon">📤</div>
                <div>Upload a Landmark Photo</div>
                <div class="upload-hint">JPG, JPEG or PNG</div>
                <input type="file" id="fileInput" accept="image/jpeg,image/png">
            </div>

            <div class="info" id="info">Please upload an image to get started.</div>

            <div class="preview" id="preview">
                <img id="previewImage" alt="Landmark preview">
            </div>

            <div class="actions" id="actions">
                <button id="discoverButton">🔍 Discover Landmark Info</button>
            </div>

            <div class="loading" id="loading">
                <div class="spinner"></div>
                <p id="loadingText"></p>
            </div>

            <div class="error" id="error"></div>

            <div class="result" id="result">
                <div class="success">✅ Description Ready!</div>
                <h3>📖 Landmark Information</h3>
                <div class="result-text" id="resultText"></div>
                <div class="download">
                    <button id="downloadButton">📥 Download Description</button>
                </div>
            </div>
        </div>
    </main>

    <script>
        const languageSelect = document.getElementById('language');
        const scenarioSelect = document.getElementById('scenario');
        const historyDiv = document.getElementById('history');
        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const info = document.getElementById('info');
        const preview = document.getElementById('preview');
        const previewImage = document.getElementById('previewImage');
        const actions = document.getElementById('actions');
        const discoverButton = document.getElementById('discoverButton');
        const loading = document.getElementById('loading');
        const loadingText = document.getElementById('loadingText');
        const errorDiv = document.getElementById('error');
        const result = document.getElementById('result');
        const resultText = document.getElementById('resultText');
        const downloadButton = document.getElementById('downloadButton');

        let selectedFile = null;
        let lastResult = null;

        async function loadOptions() {
            const response = await fetch('/api/options');
            const options = await response.json();
            for (const lang of options.languages) {
                languageSelect.add(new Option(lang.label, lang.code, false, lang.label === options.default_language));
            }
            for (const scenario of options.scenarios) {
                scenarioSelect.add(new Option(scenario, scenario, false, scenario === options.default_scenario));
            }
        }

        async function loadHistory() {
            const response = await fetch('/api/history', { credentials: 'same-origin' });
            const history = await response.json();
            historyDiv.innerHTML = '';
            if (history.entries.length === 0) {
                const empty = document.createElement('p');
                empty.className = 'history-empty';
                empty.textContent = 'No history yet.';
                historyDiv.appendChild(empty);
                return;
            }
            for (const entry of history.entries) {
                const item = document.createElement('div');
                item.className = 'history-item';
                const position = document.createElement('strong');
                position.textContent = entry.position + '. ';
                item.appendChild(position);
                item.appendChild(document.createTextNode(entry.preview));
                historyDiv.appendChild(item);
            }
        }

        function showError(message) {
            errorDiv.textContent = message;
            errorDiv.style.display = 'block';
        }

        async function handleFile(file) {
            selectedFile = file;
            errorDiv.style.display = 'none';
            result.style.display = 'none';

            const formData = new FormData();
            formData.append('image', file);
            const response = await fetch('/api/preview', { method: 'POST', body: formData });
            const body = await response.json();
            if (!response.ok) {
                selectedFile = null;
                preview.style.display = 'none';
                actions.style.display = 'none';
                info.style.display = 'block';
                showError(body.error);
                return;
            }

            previewImage.src = body.data_url;
            preview.style.display = 'flex';
            actions.style.display = 'block';
            info.style.display = 'none';
        }

        async function discover() {
            errorDiv.style.display = 'none';
            result.style.display = 'none';
            loadingText.textContent = '🔎 Analyzing landmark using scenario: ' + scenarioSelect.value;
            loading.style.display = 'block';
            discoverButton.disabled = true;

            const formData = new FormData();
            if (selectedFile) {
                formData.append('image', selectedFile);
            }
            formData.append('scenario', scenarioSelect.value);
            formData.append('language', languageSelect.value);

            try {
                const response = await fetch('/api/discover', {
                    method: 'POST',
                    body: formData,
                    credentials: 'same-origin'
                });
                const body = await response.json();
                if (!response.ok) {
                    throw new Error(body.error);
                }

                lastResult = body;
                resultText.innerHTML = body.html;
                result.style.display = 'block';
                await loadHistory();
            } catch (error) {
                showError(error.message);
            } finally {
                loading.style.display = 'none';
                discoverButton.disabled = false;
            }
        }

        function download() {
            if (lastResult) {
                window.location.href = '/api/download?id=' + lastResult.id;
            }
        }

        uploadArea.addEventListener('click', () => fileInput.click());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            const file = e.dataTransfer.files[0];
            if (file) {
                handleFile(file);
            }
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) {
                handleFile(file);
            }
        });

        discoverButton.addEventListener('click', discover);
        downloadButton.addEventListener('click', download);

        loadOptions().then(loadHistory);
    </script>
</body>
</html>
"#;
